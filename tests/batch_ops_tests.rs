#[cfg(feature = "batch-ops")]
use aesenvelope_rs::aliases::PasswordString;
#[cfg(feature = "batch-ops")]
use aesenvelope_rs::{decrypt_batch, encrypt_batch, EnvelopeError};
#[cfg(feature = "batch-ops")]
use std::io::Cursor;

#[cfg(feature = "batch-ops")]
#[test]
fn batch_roundtrip_sanity_check() {
    let password = PasswordString::new("sanity".to_string());
    let data = [b"hello parallel world"; 4];

    let mut encrypted = data.map(|d| (Cursor::new(d.to_vec()), Vec::<u8>::new()));
    encrypt_batch(&mut encrypted, &password).unwrap();

    // independent salts per job
    assert_ne!(encrypted[0].1[..16], encrypted[1].1[..16]);

    let mut decrypted = encrypted
        .into_iter()
        .map(|(_, buf)| (Cursor::new(buf), Vec::<u8>::new()))
        .collect::<Vec<_>>();
    decrypt_batch(&mut decrypted, &password).unwrap();

    let results: Vec<_> = decrypted.into_iter().map(|(_, buf)| buf).collect();
    assert_eq!(results, data.as_ref());
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_empty_batch() {
    let password = PasswordString::new("test".to_string());
    let mut batch: Vec<(Cursor<Vec<u8>>, Vec<u8>)> = Vec::new();

    encrypt_batch(&mut batch, &password).unwrap();
    assert!(batch.is_empty());
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_different_file_sizes() {
    let password = PasswordString::new("sizes".to_string());
    let data = vec![
        vec![],
        vec![0u8; 1],
        vec![0u8; 15],
        vec![0u8; 16],
        vec![0u8; 17],
        vec![0u8; 100_000],
    ];

    let mut encrypted: Vec<_> = data
        .iter()
        .map(|d| (Cursor::new(d.clone()), Vec::<u8>::new()))
        .collect();
    encrypt_batch(&mut encrypted, &password).unwrap();

    let mut decrypted: Vec<_> = encrypted
        .iter()
        .map(|(_, buf)| (Cursor::new(buf.clone()), Vec::<u8>::new()))
        .collect();
    decrypt_batch(&mut decrypted, &password).unwrap();

    let results: Vec<_> = decrypted.into_iter().map(|(_, buf)| buf).collect();
    assert_eq!(results, data);
}

#[cfg(feature = "batch-ops")]
#[test]
fn batch_stops_on_bad_envelope() {
    let password = PasswordString::new("bad".to_string());
    let mut batch = vec![
        (Cursor::new(vec![0u8; 5]), Vec::<u8>::new()),
        (Cursor::new(vec![0u8; 5]), Vec::<u8>::new()),
    ];

    let err = decrypt_batch(&mut batch, &password).unwrap_err();
    assert!(matches!(err, EnvelopeError::TruncatedEnvelope { len: 5 }));
}

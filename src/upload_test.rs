// Tests for the upload/download boundary

use super::*;
use tempfile::TempDir;

#[test]
fn test_decodes_text_data_url() {
    let contents = "data:text/plain;base64,VGhpcyBpcyBhIFJBUElEIHRlc3Qu";

    assert_eq!(decode_data_url(contents).unwrap(), "This is a RAPID test.");
}

#[test]
fn test_encoded_upload_decodes_back() {
    let text = "Café latency (approx.)";

    assert_eq!(decode_data_url(&encode_data_url(text.as_bytes())).unwrap(), text);
}

#[test]
fn test_missing_separator_is_decode_error() {
    let result = decode_data_url("data:text/plain;base64");

    assert!(matches!(result, Err(SimplifyError::Decode(_))));
}

#[test]
fn test_invalid_base64_is_decode_error() {
    let result = decode_data_url("data:text/plain;base64,@@not base64@@");

    assert!(matches!(result, Err(SimplifyError::Decode(_))));
}

#[test]
fn test_non_utf8_payload_is_decode_error() {
    let contents = encode_data_url(&[0xff, 0xfe, 0x00, 0x41]);

    assert!(matches!(decode_data_url(&contents), Err(SimplifyError::Decode(_))));
    assert!(matches!(
        decode_bytes(vec![0xc3, 0x28]),
        Err(SimplifyError::Decode(_))
    ));
}

#[test]
fn test_download_artifact_writes_fixed_filename() {
    let temp_dir = TempDir::new().unwrap();
    let artifact = DownloadArtifact::new("This is a fast test.".to_string());

    let path = artifact.write_to(temp_dir.path()).unwrap();

    assert_eq!(artifact.mime, "text/plain");
    assert_eq!(path.file_name().unwrap(), "simplified.txt");
    assert_eq!(fs::read_to_string(path).unwrap(), "This is a fast test.");
}

use chrono::{DateTime, Duration, Local};
use humansize::{format_size, BINARY};
use tf_core::{QrPayload, UploadReceipt};

/// How long tmpfile.link keeps an upload.
pub const RETENTION_DAYS: i64 = 7;

/// Final summary printed to stdout after a successful upload.
pub fn render_receipt(receipt: &UploadReceipt, elapsed_secs: u64, now: DateTime<Local>) -> String {
    let expires = now + Duration::days(RETENTION_DAYS);
    let mut lines = vec![
        format!("Link:    {}", receipt.link),
        format!("File:    {}", receipt.file_name),
        format!("Size:    {}", format_size(receipt.size_bytes, BINARY)),
        format!("Time:    {elapsed_secs}s"),
        format!(
            "Expires: in {RETENTION_DAYS} days ({})",
            expires.format("%Y-%m-%d %H:%M")
        ),
    ];

    match &receipt.qr {
        Some(QrPayload::Text(art)) => {
            lines.push(String::new());
            lines.push(art.trim_end().to_string());
        }
        Some(QrPayload::DataUrl(url)) | Some(QrPayload::RemoteUrl(url)) => {
            lines.push(format!("QR:      {url}"));
        }
        None => {}
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

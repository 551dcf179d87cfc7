/// Test data builders and helpers
use base64::Engine;
use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use postmark_transport::email::PostmarkTag;

/// Build a simple raw test email
pub fn build_simple_email(from: &str, to: &str, subject: &str, body: &str) -> String {
    format!(
        "From: {}\r\nTo: {}\r\nSubject: {}\r\nMIME-Version: 1.0\r\nContent-Type: text/plain; charset=UTF-8\r\n\r\n{}",
        from, to, subject, body
    )
}

/// Build a raw email with one attachment and one unnamed part
pub fn build_email_with_attachment(
    from: &str,
    to: &str,
    filename: &str,
    content_type: &str,
    attachment_data: &[u8],
) -> String {
    let boundary = "----=_Part_0_987654321.1234567890";
    let encoded = base64::engine::general_purpose::STANDARD.encode(attachment_data);

    format!(
        "From: {}\r\n\
         To: {}\r\n\
         Subject: With attachment\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/mixed; boundary=\"{}\"\r\n\
         \r\n\
         --{}\r\n\
         Content-Type: text/plain; charset=UTF-8\r\n\
         \r\n\
         See attached\r\n\
         --{}\r\n\
         Content-Type: application/octet-stream\r\n\
         Content-Transfer-Encoding: base64\r\n\
         \r\n\
         AAEC\r\n\
         --{}\r\n\
         Content-Type: {}\r\n\
         Content-Disposition: attachment; filename=\"{}\"\r\n\
         Content-Transfer-Encoding: base64\r\n\
         \r\n\
         {}\r\n\
         --{}--\r\n",
        from,
        to,
        boundary,
        boundary,
        boundary,
        boundary,
        content_type,
        filename,
        encoded,
        boundary
    )
}

/// Host message with a single recipient
pub fn order_confirmation() -> Message {
    Message::builder()
        .from("Shop <shop@example.com>".parse().unwrap())
        .to("yash+1@example.com".parse().unwrap())
        .subject("Order confirmation")
        .header(PostmarkTag::new("order"))
        .body(String::from("Thanks for your order"))
        .unwrap()
}

/// Host message exercising every header the transport reads
pub fn invoice_with_attachment() -> Message {
    Message::builder()
        .keep_bcc()
        .from("Shop <shop@example.com>".parse().unwrap())
        .to("Jane Doe <jane@example.com>".parse().unwrap())
        .cc("accounts@example.com".parse().unwrap())
        .bcc("audit@example.com".parse().unwrap())
        .reply_to("support@example.com".parse().unwrap())
        .subject("Invoice #1001")
        .header(PostmarkTag::new("invoice"))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(String::from("See attached")))
                .singlepart(
                    Attachment::new(String::from("x.png"))
                        .body(b"hello".to_vec(), ContentType::parse("image/png").unwrap()),
                ),
        )
        .unwrap()
}

/// Single-part HTML host message
pub fn welcome_html() -> Message {
    Message::builder()
        .from("Shop <shop@example.com>".parse().unwrap())
        .to("yash+1@example.com".parse().unwrap())
        .subject("Welcome")
        .header(ContentType::TEXT_HTML)
        .body(String::from("<p>Hello <b>world</b></p>"))
        .unwrap()
}

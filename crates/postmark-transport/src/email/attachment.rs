/// Attachment selection
use crate::models::{MimePart, PayloadAttachment};

/// Collects the file attachments of a message in encounter order.
///
/// Inline content and parts without a filename are skipped.
pub fn collect_attachments(parts: &[MimePart]) -> Vec<PayloadAttachment> {
    parts
        .iter()
        .filter(|part| part.is_attachment())
        .filter_map(|part| {
            let name = part.filename.clone()?;
            Some(PayloadAttachment {
                content_type: part.content_type.clone(),
                name,
                content: part.content.clone(),
            })
        })
        .collect()
}

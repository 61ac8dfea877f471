//! Concurrent attachment decoding with selection-order results.

use futures::stream::{FuturesUnordered, StreamExt};
use suporte_core::attachment::{Attachment, AttachmentDecoder, AttachmentWarning, SelectedFile};
use suporte_core::error::DecodeError;
use tracing::warn;

/// Outcome of decoding one batch of selected files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBatch {
    /// Successfully decoded files, in selection order
    pub attachments: Vec<Attachment>,
    /// Files that were dropped, in selection order
    pub warnings: Vec<AttachmentWarning>,
}

/// Decodes all files concurrently and returns them in selection order.
///
/// Each result is written into the slot of its original index as it
/// completes, so the final order never depends on completion order. A
/// failed file only loses its own slot.
pub async fn decode_in_selection_order(
    decoder: &dyn AttachmentDecoder,
    files: &[SelectedFile],
) -> DecodedBatch {
    let mut slots: Vec<Option<Result<Attachment, DecodeError>>> = vec![None; files.len()];

    let mut pending: FuturesUnordered<_> = files
        .iter()
        .enumerate()
        .map(|(index, file)| async move { (index, decoder.decode(file).await) })
        .collect();

    while let Some((index, outcome)) = pending.next().await {
        slots[index] = Some(outcome);
    }

    let mut batch = DecodedBatch::default();
    for (index, (slot, file)) in slots.into_iter().zip(files).enumerate() {
        match slot {
            Some(Ok(attachment)) => batch.attachments.push(attachment),
            Some(Err(reason)) => {
                warn!(index, file_name = %file.name, error = %reason, "Dropping attachment");
                batch.warnings.push(AttachmentWarning {
                    index,
                    file_name: file.name.clone(),
                    reason,
                });
            }
            // every future is driven to completion above
            None => {}
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use suporte_core::attachment::FileSource;

    /// Sleeps inversely to the index so later files finish first.
    struct ReversedDecoder;

    #[async_trait]
    impl AttachmentDecoder for ReversedDecoder {
        async fn decode(&self, file: &SelectedFile) -> Result<Attachment, DecodeError> {
            let FileSource::Bytes(bytes) = &file.source else {
                return Err(DecodeError::Empty);
            };
            let Some(&delay) = bytes.first() else {
                return Err(DecodeError::Empty);
            };
            tokio::time::sleep(Duration::from_millis(u64::from(delay))).await;
            Ok(Attachment {
                file_name: file.name.clone(),
                mime_type: "image/png".to_string(),
                size_bytes: bytes.len() as u64,
                data_url: format!("data:image/png;base64,{}", file.name),
            })
        }
    }

    fn names(batch: &DecodedBatch) -> Vec<&str> {
        batch.attachments.iter().map(|a| a.file_name.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_follow_selection_not_completion() {
        let files = vec![
            SelectedFile::from_bytes("1.png", vec![30]),
            SelectedFile::from_bytes("2.png", vec![20]),
            SelectedFile::from_bytes("3.png", vec![10]),
        ];

        let batch = decode_in_selection_order(&ReversedDecoder, &files).await;

        assert_eq!(names(&batch), vec!["1.png", "2.png", "3.png"]);
        assert!(batch.warnings.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_slot_becomes_warning() {
        let files = vec![
            SelectedFile::from_bytes("1.png", vec![5]),
            SelectedFile::from_bytes("vazio.png", Vec::new()),
            SelectedFile::from_bytes("3.png", vec![1]),
        ];

        let batch = decode_in_selection_order(&ReversedDecoder, &files).await;

        assert_eq!(names(&batch), vec!["1.png", "3.png"]);
        assert_eq!(batch.warnings.len(), 1);
        assert_eq!(batch.warnings[0].index, 1);
        assert_eq!(batch.warnings[0].reason, DecodeError::Empty);
    }

    #[tokio::test]
    async fn test_empty_selection() {
        let batch = decode_in_selection_order(&ReversedDecoder, &[]).await;
        assert_eq!(batch, DecodedBatch::default());
    }
}

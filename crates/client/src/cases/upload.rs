//! File upload inputs
//!
//! Attachment content is either fully buffered or streamed from an async
//! reader. Either way the source is moved into the request body, so it is
//! dropped (and therefore closed) on success, error, and cancellation alike.

use std::fmt;

use casedesk_domain::{CaseDeskError, Result};
use reqwest::multipart::Part;
use reqwest::Body;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Content for one uploaded file.
pub enum AttachmentBody {
    /// Fully buffered content.
    Bytes(Vec<u8>),
    /// Content streamed from an async reader; consumed by a single attempt.
    Stream(Box<dyn AsyncRead + Send + Sync + Unpin + 'static>),
}

/// A file to attach to a case, with its upload metadata.
pub struct FileWithMetadata {
    pub filename: String,
    pub content_type: Option<String>,
    pub body: AttachmentBody,
}

impl FileWithMetadata {
    /// Attach fully buffered content.
    pub fn from_bytes(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self { filename: filename.into(), content_type: None, body: AttachmentBody::Bytes(data) }
    }

    /// Attach content streamed from an async reader.
    ///
    /// The reader is owned by the request from here on; it is closed when the
    /// upload finishes, fails, or is cancelled.
    pub fn from_reader(
        filename: impl Into<String>,
        reader: impl AsyncRead + Send + Sync + Unpin + 'static,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            body: AttachmentBody::Stream(Box::new(reader)),
        }
    }

    /// Set the MIME content type sent with the part.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Convert into a multipart part, consuming the content source.
    pub(crate) fn into_part(self) -> Result<Part> {
        let mut part = match self.body {
            AttachmentBody::Bytes(data) => Part::bytes(data),
            AttachmentBody::Stream(reader) => {
                Part::stream(Body::wrap_stream(ReaderStream::new(reader)))
            }
        };

        part = part.file_name(self.filename);
        if let Some(content_type) = self.content_type {
            part = part.mime_str(&content_type).map_err(|e| {
                CaseDeskError::InvalidInput(format!("invalid content type: {}", e))
            })?;
        }

        Ok(part)
    }

    /// True when the content can be replayed for a retry.
    pub fn is_replayable(&self) -> bool {
        matches!(self.body, AttachmentBody::Bytes(_))
    }
}

impl fmt::Debug for FileWithMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            AttachmentBody::Bytes(data) => format!("Bytes({} bytes)", data.len()),
            AttachmentBody::Stream(_) => "Stream".to_string(),
        };
        f.debug_struct("FileWithMetadata")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("body", &body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_files_are_replayable() {
        let file = FileWithMetadata::from_bytes("diagnostics.png", b"hello world".to_vec());
        assert!(file.is_replayable());
        assert_eq!(file.filename, "diagnostics.png");
    }

    #[test]
    fn streamed_files_are_not_replayable() {
        let file = FileWithMetadata::from_reader("trace.log", &b"hello world"[..]);
        assert!(!file.is_replayable());
    }

    #[test]
    fn content_type_setter_is_applied() {
        let file = FileWithMetadata::from_bytes("diagnostics.png", vec![])
            .content_type("application/octet-stream");
        assert_eq!(file.content_type.as_deref(), Some("application/octet-stream"));
    }

    #[test]
    fn invalid_content_type_is_rejected() {
        let file =
            FileWithMetadata::from_bytes("diagnostics.png", vec![]).content_type("not a mime");
        let result = file.into_part();
        assert!(matches!(result, Err(CaseDeskError::InvalidInput(_))));
    }

    #[test]
    fn valid_file_converts_to_part() {
        let file = FileWithMetadata::from_bytes("diagnostics.png", b"content".to_vec())
            .content_type("application/octet-stream");
        assert!(file.into_part().is_ok());
    }
}

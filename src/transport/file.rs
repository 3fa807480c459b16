//! # File Transport
//!
//! Writes a finished raster command to a file. The path may equally be a
//! serial device node such as `/dev/serial0`; it is opened as a plain file,
//! with no TTY configuration.
//!
//! The file is only created once the complete command exists in memory, so
//! an upstream failure never leaves a half-written output behind.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::LogoError;
use crate::protocol::graphics::RasterImage;

/// Write header + bitmap to `sink` as one contiguous buffer.
pub fn emit<W: Write>(sink: &mut W, image: &RasterImage) -> Result<(), LogoError> {
    sink.write_all(&image.to_bytes())?;
    sink.flush()?;
    Ok(())
}

/// # File Transport
///
/// ## Example
///
/// ```no_run
/// use logobin::transport::FileTransport;
///
/// let mut transport = FileTransport::create("Logo.bin")?;
/// transport.write_all(&[0x1D, 0x76, 0x30])?;
///
/// # Ok::<(), logobin::LogoError>(())
/// ```
pub struct FileTransport {
    file: File,
    path: PathBuf,
}

impl FileTransport {
    /// Create (or truncate) the output file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, LogoError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self { file, path })
    }

    /// Write all bytes and flush.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), LogoError> {
        self.file.write_all(data)?;
        self.file.flush()?;
        Ok(())
    }

    /// Emit a raster command and report where it went.
    pub fn send(&mut self, image: &RasterImage) -> Result<(), LogoError> {
        emit(&mut self.file, image)?;
        info!(
            "Wrote {} bytes to {}",
            image.byte_len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::graphics::{RasterHeader, ScaleMode};
    use pretty_assertions::assert_eq;

    fn sample() -> RasterImage {
        let header = RasterHeader::new(ScaleMode::NORMAL, 16, 2).unwrap();
        RasterImage::new(header, vec![0xFF, 0x00, 0x0F, 0xF0]).unwrap()
    }

    #[test]
    fn test_emit_is_header_then_bitmap() {
        let mut sink = Vec::new();
        emit(&mut sink, &sample()).unwrap();
        assert_eq!(
            sink,
            vec![0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x02, 0x00, 0xFF, 0x00, 0x0F, 0xF0]
        );
    }

    #[test]
    fn test_file_transport_send() {
        let path = std::env::temp_dir().join(format!("logobin-transport-{}.bin", std::process::id()));
        let mut transport = FileTransport::create(&path).unwrap();
        transport.send(&sample()).unwrap();
        assert_eq!(transport.path(), path.as_path());

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), sample().byte_len());
        assert_eq!(written, sample().to_bytes());
        std::fs::remove_file(&path).unwrap();
    }
}

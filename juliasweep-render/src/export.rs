//! Grayscale PNG frame export with embedded metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use juliasweep_core::Complex;

use crate::error::RenderError;

/// Metadata to embed in an exported frame as tEXt chunks.
///
/// Enough to reconstruct the frame: the sweep position, the derived
/// parameter, and the iteration budget.
#[derive(Debug, Clone)]
pub struct FrameMetadata {
    pub frame: u32,
    pub frames_total: u32,
    pub theta: f64,
    pub c: Complex,
    pub separation: f64,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
}

/// Write an 8-bit grayscale pixel buffer as a PNG file with embedded
/// sweep metadata.
///
/// Uses the `png` crate directly (rather than `image`) to inject custom
/// tEXt chunks readable by exiftool, IrfanView, XnView, etc.
pub fn export_frame(
    pixels: &[u8],
    width: u32,
    height: u32,
    path: &Path,
    metadata: &FrameMetadata,
) -> crate::Result<()> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(RenderError::BufferMismatch {
            got: pixels.len(),
            width,
            height,
        });
    }

    let file = std::fs::File::create(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "JuliaSweep".to_string())?;
    encoder.add_text_chunk("Description".to_string(), build_description(metadata))?;
    for (key, value) in build_metadata_pairs(metadata) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(pixels)?;

    debug!("Exported frame {}x{} to {}", width, height, path.display());
    Ok(())
}

fn build_description(meta: &FrameMetadata) -> String {
    format!(
        "Frame {}/{} - c: {}, theta: {:.6}, iterations: {}",
        meta.frame + 1,
        meta.frames_total,
        meta.c,
        meta.theta,
        meta.max_iterations,
    )
}

fn build_metadata_pairs(meta: &FrameMetadata) -> Vec<(String, String)> {
    vec![
        ("JuliaSweep.Frame".into(), meta.frame.to_string()),
        ("JuliaSweep.FramesTotal".into(), meta.frames_total.to_string()),
        ("JuliaSweep.Theta".into(), format!("{}", meta.theta)),
        ("JuliaSweep.C_Re".into(), format!("{}", meta.c.re)),
        ("JuliaSweep.C_Im".into(), format!("{}", meta.c.im)),
        ("JuliaSweep.Separation".into(), format!("{}", meta.separation)),
        (
            "JuliaSweep.MaxIterations".into(),
            meta.max_iterations.to_string(),
        ),
        (
            "JuliaSweep.Resolution".into(),
            format!("{}x{}", meta.width, meta.height),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn metadata(w: u32, h: u32) -> FrameMetadata {
        FrameMetadata {
            frame: 3,
            frames_total: 100,
            theta: 0.380952,
            c: Complex::from_polar(0.7885, 0.380952),
            separation: 0.7885,
            max_iterations: 10,
            width: w,
            height: h,
        }
    }

    #[test]
    fn export_creates_valid_png() {
        let (w, h) = (4u32, 4u32);
        let pixels = vec![128u8; (w * h) as usize];
        let dir = std::env::temp_dir().join("juliasweep_test_export");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("frame_0003.png");
        export_frame(&pixels, w, h, &path, &metadata(w, h)).expect("export should succeed");

        let mut file = std::fs::File::open(&path).expect("file should exist");
        let mut header = [0u8; 8];
        file.read_exact(&mut header).expect("should read header");
        assert_eq!(&header, b"\x89PNG\r\n\x1a\n", "valid PNG signature");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_embeds_text_chunks() {
        let (w, h) = (2u32, 2u32);
        let pixels = vec![0u8; (w * h) as usize];
        let dir = std::env::temp_dir().join("juliasweep_test_export_meta");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("frame_meta.png");
        export_frame(&pixels, w, h, &path, &metadata(w, h)).expect("export should succeed");

        let decoder = png::Decoder::new(std::fs::File::open(&path).expect("file should exist"));
        let reader = decoder.read_info().expect("should read info");
        let info = reader.info();
        let texts: Vec<_> = info.uncompressed_latin1_text.iter().collect();
        assert!(
            texts
                .iter()
                .any(|t| t.keyword == "Software" && t.text == "JuliaSweep"),
            "Should contain Software text chunk"
        );
        assert!(
            texts
                .iter()
                .any(|t| t.keyword == "JuliaSweep.Frame" && t.text == "3"),
            "Should contain frame index chunk"
        );
        assert!(
            texts
                .iter()
                .any(|t| t.keyword == "JuliaSweep.Separation" && t.text == "0.7885"),
            "Should contain separation chunk"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_rejects_mismatched_buffer() {
        let pixels = vec![0u8; 5];
        let dir = std::env::temp_dir().join("juliasweep_test_export_bad");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("frame_bad.png");
        let err = export_frame(&pixels, 4, 4, &path, &metadata(4, 4)).unwrap_err();
        assert!(matches!(err, RenderError::BufferMismatch { got: 5, .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }
}

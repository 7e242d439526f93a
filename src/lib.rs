//! Small file-conversion command-line tools built around external programs.
//!
//! * `autocrop` trims whitespace borders from PNG/JPEG images (ImageMagick).
//! * `convert_to_compressed_pdf` turns images into compressed PDFs (Inkscape
//!   + Ghostscript) or compresses an existing PDF.
//! * `stl2vtk` converts a binary STL mesh to legacy VTK PolyData.
//!
//! Every tool derives its output path from the input by string substitution
//! and refuses to overwrite an existing file.

pub mod config;
pub mod error;
pub mod guard;
pub mod invoke;
pub mod logging;
pub mod path;
pub mod pipeline;
pub mod stl;

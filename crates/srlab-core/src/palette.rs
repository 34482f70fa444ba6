//! Palette file writers
//!
//! - GIMP `.gpl` text palettes
//! - JASC `.pal` text palettes
//! - Adobe Swatch Exchange `.ase` binary palettes
//!
//! All writers saturate channels to [0, 1] before quantizing. None of them
//! touch the filesystem; callers decide where the bytes go.

use crate::color::Rgb;
use crate::hex::to_hex_web;

/// Options for [`to_gpl_string`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GplOptions {
    /// Palette name; a leading digit gets an `id` prefix
    pub name: String,
    /// Columns hint for GIMP's palette view; `None` means ⌈√n⌉
    pub columns: Option<usize>,
    /// Append a 1-based index to each color line
    pub with_index: bool,
}

impl Default for GplOptions {
    fn default() -> Self {
        Self {
            name: "Palette".to_owned(),
            columns: None,
            with_index: false,
        }
    }
}

fn byte_triplet(c: &Rgb) -> String {
    let [r, g, b, _] = c.to_bytes_sat();
    format!("{} {} {}", r, g, b)
}

/// GIMP palette text
///
/// ```text
/// GIMP Palette
/// Name: Palette
/// Columns: 2
/// # srlab
/// 255 0 0 FF0000
/// ```
pub fn to_gpl_string(colors: &[Rgb], options: &GplOptions) -> String {
    let name = if options.name.is_empty() {
        "Palette"
    } else {
        options.name.as_str()
    };
    let prefix = if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        "id"
    } else {
        ""
    };
    let columns = options
        .columns
        .unwrap_or_else(|| (colors.len() as f64).sqrt().ceil() as usize);

    let mut out = format!("GIMP Palette\nName: {prefix}{name}\nColumns: {columns}\n# srlab");
    for (i, c) in colors.iter().enumerate() {
        out.push('\n');
        out.push_str(&byte_triplet(c));
        out.push(' ');
        out.push_str(&to_hex_web(c)[1..]);
        if options.with_index {
            out.push_str(&format!(" {}", i + 1));
        }
    }
    out
}

/// JASC palette text: header, count, then one `R G B` line per color
pub fn to_pal_string(colors: &[Rgb]) -> String {
    let mut out = format!("JASC-PAL\n0100\n{}", colors.len());
    for c in colors {
        out.push('\n');
        out.push_str(&byte_triplet(c));
    }
    out
}

const ASE_SIGNATURE: &[u8; 4] = b"ASEF";
const ASE_VERSION: u32 = 0x0001_0000;
const ASE_GROUP_START: u16 = 0xc001;
const ASE_GROUP_END: u16 = 0xc002;
const ASE_COLOR_ENTRY: u16 = 0x0001;
const ASE_GROUP_NAME: &str = "Palette";
/// Name length (2) + 6 hex digits and a terminator in UTF-16 (14) +
/// model (4) + three channels (12) + color type (2)
const ASE_COLOR_BLOCK_LEN: u32 = 34;
/// Normal (non-global, non-spot) color
const ASE_COLOR_TYPE_NORMAL: u16 = 2;

fn push_utf16_name(out: &mut Vec<u8>, name: &str) {
    let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
    out.extend_from_slice(&(units.len() as u16).to_be_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
}

/// Adobe Swatch Exchange bytes
///
/// One group named "Palette" holding one RGB swatch per color, each named
/// by its six-digit hex code. All integers and floats are big-endian.
pub fn to_ase_bytes(colors: &[Rgb]) -> Vec<u8> {
    let mut out = Vec::with_capacity(42 + 40 * colors.len());

    out.extend_from_slice(ASE_SIGNATURE);
    out.extend_from_slice(&ASE_VERSION.to_be_bytes());
    out.extend_from_slice(&(colors.len() as u32 + 2).to_be_bytes());

    let group_name_len = 2 + 2 * (ASE_GROUP_NAME.encode_utf16().count() + 1);
    out.extend_from_slice(&ASE_GROUP_START.to_be_bytes());
    out.extend_from_slice(&(group_name_len as u32).to_be_bytes());
    push_utf16_name(&mut out, ASE_GROUP_NAME);

    for c in colors {
        let c = c.clamp01();
        out.extend_from_slice(&ASE_COLOR_ENTRY.to_be_bytes());
        out.extend_from_slice(&ASE_COLOR_BLOCK_LEN.to_be_bytes());
        push_utf16_name(&mut out, &to_hex_web(&c)[1..]);
        out.extend_from_slice(b"RGB ");
        for v in [c.r, c.g, c.b] {
            out.extend_from_slice(&v.to_be_bytes());
        }
        out.extend_from_slice(&ASE_COLOR_TYPE_NORMAL.to_be_bytes());
    }

    out.extend_from_slice(&ASE_GROUP_END.to_be_bytes());
    out.extend_from_slice(&0u32.to_be_bytes());
    out
}

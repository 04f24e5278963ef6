//! Minimal ICO container writer.
//!
//! Only the single-image, 32 bits per pixel, uncompressed DIB flavour is
//! supported. All fields are little-endian.

use std::io::Write;

pub const MAX_DIMENSION: u32 = 256;

const ICON_TYPE: u16 = 1;
const BITS_PER_PIXEL: u16 = 32;
const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum IcoError {
    #[error("icon dimensions {width}x{height} are outside of 1..={}", MAX_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },
}

/// Pixel value in the byte order used by 32-bit DIBs.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub const BLACK: Bgra = Bgra::opaque(0x00, 0x00, 0x00);
    pub const YELLOW: Bgra = Bgra::opaque(0xff, 0xee, 0x00);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Bgra { b, g, r, a: 0xff }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct IconDirHeader {
    pub count: u16,
}

impl IconDirHeader {
    pub const SIZE: usize = 6;

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        w.write_all(&0u16.to_le_bytes())?;
        w.write_all(&ICON_TYPE.to_le_bytes())?;
        w.write_all(&self.count.to_le_bytes())?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct IconDirEntry {
    pub width: u32,
    pub height: u32,
    pub bit_count: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

impl IconDirEntry {
    pub const SIZE: usize = 16;

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        // a stored 0 means 256
        w.write_all(&[dimension_byte(self.width), dimension_byte(self.height)])?;
        // palette size, reserved
        w.write_all(&[0, 0])?;
        // colour planes
        w.write_all(&1u16.to_le_bytes())?;
        w.write_all(&self.bit_count.to_le_bytes())?;
        w.write_all(&self.bytes_in_res.to_le_bytes())?;
        w.write_all(&self.image_offset.to_le_bytes())?;
        Ok(())
    }
}

fn dimension_byte(value: u32) -> u8 {
    if value < MAX_DIMENSION {
        value as u8
    } else {
        0
    }
}

/// The 40-byte `BITMAPINFOHEADER` preceding the pixel data of an icon image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BitmapInfoHeader {
    pub width: u32,
    pub height: u32,
}

impl BitmapInfoHeader {
    pub const SIZE: usize = 40;

    pub fn pixel_bytes(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }

    /// Size of the AND mask, with each row padded to a 32-bit boundary.
    pub fn mask_bytes(&self) -> usize {
        let stride = (self.width as usize + 31) / 32 * 4;
        stride * self.height as usize
    }

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        w.write_all(&(Self::SIZE as u32).to_le_bytes())?;
        w.write_all(&self.width.to_le_bytes())?;
        // XOR image and AND mask stacked on top of each other
        w.write_all(&(self.height * 2).to_le_bytes())?;
        w.write_all(&1u16.to_le_bytes())?;
        w.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
        // BI_RGB
        w.write_all(&0u32.to_le_bytes())?;
        w.write_all(&(self.pixel_bytes() as u32).to_le_bytes())?;
        // resolution x/y, colours used, colours important
        for _ in 0..4 {
            w.write_all(&0u32.to_le_bytes())?;
        }
        Ok(())
    }
}

/// Which part of the bordered square a pixel falls into.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Region {
    Border,
    InnerBorder,
    Fill,
}

impl Region {
    const BORDER: u32 = 2;
    const INNER_BORDER: u32 = 4;

    pub fn of(x: u32, y: u32, width: u32, height: u32) -> Region {
        let within = |edge: u32| {
            x < edge
                || x >= width.saturating_sub(edge)
                || y < edge
                || y >= height.saturating_sub(edge)
        };
        if within(Self::BORDER) {
            Region::Border
        } else if within(Self::INNER_BORDER) {
            Region::InnerBorder
        } else {
            Region::Fill
        }
    }

    pub fn colour(self) -> Bgra {
        match self {
            Region::Border | Region::InnerBorder => Bgra::BLACK,
            Region::Fill => Bgra::YELLOW,
        }
    }
}

/// A device-independent bitmap as stored inside an ICO entry.
#[derive(Debug, Clone)]
pub struct Dib {
    header: BitmapInfoHeader,
    pixels: Vec<u8>,
    mask: Vec<u8>,
}

impl Dib {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, IcoError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(IcoError::InvalidDimensions { width, height });
        }
        let header = BitmapInfoHeader { width, height };
        if pixels.len() != header.pixel_bytes() {
            return Err(IcoError::PixelBufferSize {
                expected: header.pixel_bytes(),
                actual: pixels.len(),
            });
        }
        // all bits clear: every pixel opaque
        let mask = vec![0; header.mask_bytes()];
        Ok(Dib {
            header,
            pixels,
            mask,
        })
    }

    /// Square with a black border around a yellow fill.
    pub fn bordered_square(size: u32) -> Result<Self, IcoError> {
        let mut pixels = Vec::with_capacity(size as usize * size as usize * BYTES_PER_PIXEL);
        for y in 0..size {
            for x in 0..size {
                pixels.extend_from_slice(&Region::of(x, y, size, size).colour().to_bytes());
            }
        }
        Dib::new(size, size, pixels)
    }

    pub fn header(&self) -> &BitmapInfoHeader {
        &self.header
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    pub fn encoded_len(&self) -> usize {
        BitmapInfoHeader::SIZE + self.pixels.len() + self.mask.len()
    }

    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        self.header.write_to(&mut w)?;
        w.write_all(&self.pixels)?;
        w.write_all(&self.mask)?;
        Ok(())
    }
}

/// Writes a complete ICO file holding just `dib`.
pub fn write_single(dib: &Dib, mut w: impl Write) -> std::io::Result<()> {
    let offset = IconDirHeader::SIZE + IconDirEntry::SIZE;
    let entry = IconDirEntry {
        width: dib.header().width,
        height: dib.header().height,
        bit_count: BITS_PER_PIXEL,
        bytes_in_res: dib.encoded_len() as u32,
        image_offset: offset as u32,
    };

    IconDirHeader { count: 1 }.write_to(&mut w)?;
    entry.write_to(&mut w)?;
    dib.write_to(&mut w)?;
    Ok(())
}

pub fn encode_single(dib: &Dib) -> Vec<u8> {
    let mut buf =
        Vec::with_capacity(IconDirHeader::SIZE + IconDirEntry::SIZE + dib.encoded_len());
    // writing into a Vec never fails
    let _ = write_single(dib, &mut buf);
    buf
}

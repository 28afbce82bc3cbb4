//! Single-page A4 PDF holding one raster image.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::DynamicImage;
use lopdf::{dictionary, Document, Object, Stream};

use crate::export::layout::{fit_to_page, A4_HEIGHT_PT, A4_WIDTH_PT};
use crate::export::ExportError;

const IMAGE_RESOURCE: &str = "Im1";

/// Decoded raster as flate-compressed 8-bit RGB, ready for an image XObject.
struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Decodes PNG or JPEG bytes. Transparent pixels are blended onto white.
    fn decode(bytes: &[u8]) -> Result<Self, ExportError> {
        let image = image::load_from_memory(bytes)?;
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyImage);
        }

        let rgb = flatten_onto_white(&image);

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&rgb)?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn into_pdf_stream(self) -> Stream {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        Stream::new(dict, self.data)
    }
}

fn flatten_onto_white(image: &DynamicImage) -> Vec<u8> {
    if !image.color().has_alpha() {
        return image.to_rgb8().into_raw();
    }

    let rgba = image.to_rgba8();
    let mut rgb = Vec::with_capacity(rgba.width() as usize * rgba.height() as usize * 3);
    for pixel in rgba.pixels() {
        let alpha = pixel[3] as f32 / 255.0;
        for channel in &pixel.0[..3] {
            rgb.push((*channel as f32 * alpha + 255.0 * (1.0 - alpha)) as u8);
        }
    }
    rgb
}

/// Builds the PDF bytes: one A4 page, the image placed by `fit_to_page`.
pub fn render_image_pdf(image_bytes: &[u8]) -> Result<Vec<u8>, ExportError> {
    let raster = RasterImage::decode(image_bytes)?;
    let placement = fit_to_page(raster.width, raster.height)?;
    let (x, y, width, height) = placement.to_points();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(raster.into_pdf_stream());

    // q  w 0 0 h x y cm  /Im1 Do  Q
    let operators =
        format!("q\n{width:.4} 0 0 {height:.4} {x:.4} {y:.4} cm\n/{IMAGE_RESOURCE} Do\nQ\n");
    let content_id = doc.add_object(Stream::new(dictionary! {}, operators.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (A4_WIDTH_PT as f32).into(),
            (A4_HEIGHT_PT as f32).into(),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_RESOURCE => image_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    Ok(buffer)
}

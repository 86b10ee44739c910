pub mod raster_decoder;

pub use raster_decoder::RasterImageDecoder;

//! Channel map module
//!
//! Loading of the channel-index-to-name dictionary and its serialization into
//! the text stored in a TIFF description field.

mod ascii_formatter;
mod channel_map;

#[cfg(test)]
mod tests;

pub use ascii_formatter::AsciiJsonFormatter;
pub use channel_map::ChannelMap;

//! Line formatting: colors, timestamps and payload serialization

mod color;
mod formatter;
mod serialize;

pub use color::{hash_str, hue_to_rgb, module_color, module_hue, set_color_override, unset_color_override};
pub use formatter::{Formatter, LABEL_WIDTH, TIMESTAMP_FORMAT};
pub use serialize::{
    error_payload, render_payload, to_json, to_pretty_json, SerializeError, SerializeResult, CIRCULAR,
};

//! Turns a generative model's learning-roadmap markdown into a [`Roadmap`]:
//! skills, weekly modules, and free-text notes.
//!
//! Parsing is a pure function of the input string. Calls share no state, so any
//! number can run on separate threads. A request-rate counter kept by a caller and
//! shared between such threads has to be synchronized by that caller.

pub mod parser;
pub mod roadmap;
pub mod settings;
pub mod sink;

pub use parser::{parse_roadmap, parse_roadmap_with, ParseOptions};
pub use roadmap::{ParsedResponse, Roadmap, WeekEntry};

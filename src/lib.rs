// Library root
// -----------
// The binary (`main.rs`) parses flags and hands off to these modules.
//
// Module responsibilities:
// - `profile`: the static record of everything the portfolio says.
// - `theme` / `config`: colour presets and the startup configuration
//   read from `TERM_THEME`.
// - `render`: one function per text block (About, Collaborate, Contact,
//   Help, Farewell), writing to any `io::Write`.
// - `banner`: FIGlet title art behind a single async call.
// - `ui`: the interactive menu loop and the loading spinner.
// - `cli`: flag parsing and dispatch to the right block or the menu.
pub mod banner;
pub mod cli;
pub mod config;
pub mod profile;
pub mod render;
pub mod theme;
pub mod ui;

// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
              _
   __ _ _   _(_)______ _  ___ _ __
  / _` | | | | |_  / _` |/ _ \ '_ \
 | (_| | |_| | |/ / (_| |  __/ | | |
  \__, |\__,_|_/___\__, |\___|_| |_|
     |_|           |___/

    Text -> Multiple-Choice Quiz Generator
"#;
    println!("{}", banner);
}

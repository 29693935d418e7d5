use clap::{load_yaml, App};

use rlf_color::dimacs_bin;
use rlf_color::orlib;
use rlf_color::util::exit_error;

/** converts an OR-library coloring instance into DIMACS binary,
written next to the input as `<orlib_file>.b` */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("converter.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap();

    // read and convert
    let inst = match orlib::read_from_file(inst_filename) {
        Ok(g) => g,
        Err(e) => exit_error(e),
    };
    inst.display_statistics();
    let out_filename = format!("{}.b", inst_filename);
    if let Err(e) = dimacs_bin::write_to_file(&out_filename, &inst) {
        exit_error(e);
    }
    eprintln!("written: {}", out_filename);
}

use clap::{load_yaml, App};
use fastrand::Rng;

use rlf_color::dimacs;
use rlf_color::dimacs_bin;
use rlf_color::generator::random_graph;
use rlf_color::graph::MAX_VERTICES;
use rlf_color::util::exit_error;

fn parse_arg<T: std::str::FromStr>(args: &clap::ArgMatches, name: &str) -> T {
    let raw = args.value_of(name).unwrap();
    match raw.parse::<T>() {
        Ok(v) => v,
        Err(_) => exit_error(format!("invalid value '{}' for <{}>", raw, name)),
    }
}

/** generates a G(n, d) random instance and emits it as DIMACS ASCII
(type 0), an AMPL data stub (type 1, reserved) or a DIMACS binary
file named `g-<n>-<d>-<s>.b` (type 2) */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("generator.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let n: usize = parse_arg(&main_args, "n");
    let d: f64 = parse_arg(&main_args, "density");
    let s: u64 = parse_arg(&main_args, "seed");
    let t: usize = parse_arg(&main_args, "type");
    if n > MAX_VERTICES {
        exit_error(format!("{} vertices (maximum {})", n, MAX_VERTICES));
    }

    // sample the instance
    let mut rng = Rng::with_seed(s);
    let inst = random_graph(n, d, &mut rng);

    match t {
        0 => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let comment = format!("graph gen seed {}", s);
            if let Err(e) = dimacs::write_instance(&mut out, &inst, Some(&comment)) {
                exit_error(e);
            }
        }
        1 => {
            // AMPL output is reserved
            println!("data;");
            println!("param n := {};", n);
        }
        2 => {
            let filename = format!("g-{}-{}-{}.b", n, d, s);
            if let Err(e) = dimacs_bin::write_to_file(&filename, &inst) {
                exit_error(e);
            }
        }
        _ => exit_error(format!("unknown instance type {}", t)),
    }
}

use clap::{load_yaml, App};
use serde_json::json;

use rlf_color::dimacs_bin;
use rlf_color::search::rlf_adaptive::rlf_adaptive;
use rlf_color::util::{exit_error, export_results, print_result, tie_break_rng, CpuTimer};

/** colors a DIMACS binary instance using RLF with a density-triggered
switch between eager and lazy degree-into-U maintenance */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("rlf_adaptive.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap();
    let seed = main_args.value_of("seed").map(|s| match s.parse::<u64>() {
        Ok(v) => v,
        Err(_) => exit_error(format!("invalid seed '{}'", s)),
    });
    let density_threshold = match main_args.value_of("density") {
        None => 0.0,
        Some(s) => match s.parse::<f64>() {
            Ok(v) => v,
            Err(_) => exit_error(format!("invalid density threshold '{}'", s)),
        },
    };

    // read the instance
    let inst = match dimacs_bin::read_from_file(inst_filename) {
        Ok(g) => g,
        Err(e) => exit_error(e),
    };
    inst.display_statistics();

    // solve it
    let mut rng = tie_break_rng(seed);
    let timer = CpuTimer::start();
    let solution = rlf_adaptive(&inst, &mut rng, density_threshold);
    let (cpu, sys) = timer.elapsed();
    let nb_colors = solution.len();
    print_result(nb_colors, cpu, sys);

    // export results
    let stats = json!({
        "nb_colors": nb_colors,
        "cpu_time": cpu,
        "sys_time": sys,
        "density_threshold": density_threshold,
        "inst_name": inst_filename,
    });
    if let Err(e) = export_results(
        &inst,
        &solution,
        &stats,
        main_args.value_of("perf"),
        main_args.value_of("solution"),
    ) {
        exit_error(e);
    }
}

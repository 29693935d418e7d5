use std::io;

use serde_json::Value;

use crate::color::{checker, write_solution, CheckerResult, VertexId};
use crate::graph::Graph;

/** snapshot of the process CPU clocks (user and system), taken with
`getrusage`, in seconds */
#[derive(Debug, Clone, Copy)]
pub struct CpuTimer {
    user: f64,
    sys: f64,
}

impl CpuTimer {
    /// snapshots the current CPU usage of the process
    #[allow(unsafe_code)]
    pub fn start() -> Self {
        let mut usage = std::mem::MaybeUninit::<libc::rusage>::uninit();
        let usage = unsafe {
            libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr());
            usage.assume_init()
        };
        Self {
            user: usage.ru_utime.tv_sec as f64 + usage.ru_utime.tv_usec as f64 / 1e6,
            sys: usage.ru_stime.tv_sec as f64 + usage.ru_stime.tv_usec as f64 / 1e6,
        }
    }

    /// (user, system) seconds spent since this snapshot
    pub fn elapsed(&self) -> (f64, f64) {
        let now = Self::start();
        (now.user - self.user, now.sys - self.sys)
    }
}

/// prints the result line: color count, then CPU and system seconds
pub fn print_result(nb_colors: usize, cpu: f64, sys: f64) {
    println!("X(G): {}\tCPU: {:5.3} sec   Sys: {:5.3} sec", nb_colors, cpu, sys);
}

/// builds the tie-break PRNG: seeded when a seed is given, default otherwise
pub fn tie_break_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}

/// exports search statistics and the solution to the requested files
pub fn export_results(
    inst: &Graph,
    solution: &[Vec<VertexId>],
    stats: &Value,
    perf_file: Option<&str>,
    sol_file: Option<&str>,
) -> io::Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        let encoded = serde_json::to_string(stats).map_err(io::Error::from)?;
        std::fs::write(filename, encoded)?;
    }
    // export solution
    if let Some(filename) = sol_file {
        match checker(inst, solution) {
            CheckerResult::Ok(_) => {}
            res => eprintln!("invalid solution (reason: {:?})", res),
        }
        write_solution(filename, solution)?;
    }
    Ok(())
}

/// prints the diagnostic on stderr and exits with a failure code
pub fn exit_error(err: impl std::fmt::Display) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_timer_monotonic() {
        let timer = CpuTimer::start();
        // burn a little CPU so the clocks cannot go backwards
        let mut acc = 0u64;
        for i in 0..100_000u64 {
            acc = acc.wrapping_add(i * i);
        }
        assert!(acc > 0);
        let (cpu, sys) = timer.elapsed();
        assert!(cpu >= 0.0);
        assert!(sys >= 0.0);
    }
}

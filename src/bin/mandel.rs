extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches};
use mandelbrot::MandelbrotRenderer;
use num::Complex;
use std::str::FromStr;
use std::time::Instant;

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const MINX: &str = "minx";
const MINY: &str = "miny";
const MAXX: &str = "maxx";
const MAXY: &str = "maxy";
const ITERATIONS: &str = "iterations";
const RUNS: &str = "runs";
const THREADS: &str = "threads";
const SINGLE: &str = "single";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Parallel Mandelbrot renderer")
        .setting(AppSettings::AllowNegativeNumbers)
        .help_short("H")
        .arg(
            Arg::with_name(WIDTH)
                .required(true)
                .long(WIDTH)
                .short("w")
                .takes_value(true)
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse picture width",
                        "Picture width must be at least 1",
                    )
                })
                .help("Width of the target picture in pixels"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .required(true)
                .long(HEIGHT)
                .short("h")
                .takes_value(true)
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse picture height",
                        "Picture height must be at least 1",
                    )
                })
                .help("Height of the target picture in pixels"),
        )
        .arg(
            Arg::with_name(MINX)
                .required(true)
                .long(MINX)
                .short("a")
                .takes_value(true)
                .validator(|s| validate_number::<f64>(&s, "Could not parse minimal x coordinate"))
                .help("Minimal x coordinate of the viewport"),
        )
        .arg(
            Arg::with_name(MINY)
                .required(true)
                .long(MINY)
                .short("b")
                .takes_value(true)
                .validator(|s| validate_number::<f64>(&s, "Could not parse minimal y coordinate"))
                .help("Minimal y coordinate of the viewport"),
        )
        .arg(
            Arg::with_name(MAXX)
                .required(true)
                .long(MAXX)
                .short("c")
                .takes_value(true)
                .validator(|s| validate_number::<f64>(&s, "Could not parse maximal x coordinate"))
                .help("Maximal x coordinate of the viewport"),
        )
        .arg(
            Arg::with_name(MAXY)
                .required(true)
                .long(MAXY)
                .short("d")
                .takes_value(true)
                .validator(|s| validate_number::<f64>(&s, "Could not parse maximal y coordinate"))
                .help("Maximal y coordinate of the viewport"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(true)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse iteration count",
                        "Iteration count must be at least 1",
                    )
                })
                .help("Maximal number of iterations per pixel"),
        )
        .arg(
            Arg::with_name(RUNS)
                .required(false)
                .long(RUNS)
                .short("r")
                .takes_value(true)
                .default_value("1")
                .validator(|s| {
                    validate_range::<usize>(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse run count",
                        "Run count must be at least 1",
                    )
                })
                .help("Number of repeated generations, for benchmarking"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads (default: processor count)"),
        )
        .arg(
            Arg::with_name(SINGLE)
                .required(false)
                .long(SINGLE)
                .short("s")
                .help("Run the generator in single thread mode"),
        )
        .get_matches()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = args();

    let width = usize::from_str(matches.value_of(WIDTH).unwrap())
        .expect("Could not parse picture width");
    let height = usize::from_str(matches.value_of(HEIGHT).unwrap())
        .expect("Could not parse picture height");
    let min_corner = Complex::new(
        f64::from_str(matches.value_of(MINX).unwrap()).expect("Could not parse minimal x"),
        f64::from_str(matches.value_of(MINY).unwrap()).expect("Could not parse minimal y"),
    );
    let max_corner = Complex::new(
        f64::from_str(matches.value_of(MAXX).unwrap()).expect("Could not parse maximal x"),
        f64::from_str(matches.value_of(MAXY).unwrap()).expect("Could not parse maximal y"),
    );
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count");
    let runs =
        usize::from_str(matches.value_of(RUNS).unwrap()).expect("Could not parse run count");
    let threads = if matches.is_present(SINGLE) {
        1
    } else {
        match matches.value_of(THREADS) {
            Some(t) => usize::from_str(t).expect("Could not parse thread count"),
            None => num_cpus::get(),
        }
    };

    info!("Welcome to parallel mandelbrot!");
    info!("Picture size: width = {}, height = {}", width, height);
    info!(
        "Viewport: minX = {}, minY = {}, maxX = {}, maxY = {}",
        min_corner.re, min_corner.im, max_corner.re, max_corner.im
    );
    info!("Maximal number of iterations: {}", iterations);
    info!("Worker threads: {}, runs: {}", threads, runs);

    let renderer = match MandelbrotRenderer::new(width, height, min_corner, max_corner, iterations)
    {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("invalid arguments: {}", e);
            std::process::exit(1);
        }
    };

    for run in 1..=runs {
        let start = Instant::now();
        let buffer = renderer.render(threads);
        let elapsed = start.elapsed();
        info!(
            "run {}/{}: {} pixels in {} ms",
            run,
            runs,
            buffer.len(),
            elapsed.as_millis()
        );
    }
}

use clap::Parser;

use grid_search::config::Config;
use grid_search::playback::Tick;
use grid_search::simulation::{build_board, clear_screen, compare, Session};
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    println!("Starting grid search...");
    println!("Grid size: {}x{}", config.width, config.height);
    println!("Walls: {}", config.num_walls);
    println!("Algorithm: {:?}", config.algorithm);
    println!();

    let board = match build_board(&config) {
        Ok(board) => board,
        Err(e) => {
            log::error!("Invalid board settings: {}", e);
            std::process::exit(1);
        }
    };

    let Some(mode) = config.algorithm.mode() else {
        // Run all algorithms and compare results
        match compare(&board) {
            Ok(report) => println!("{}", report),
            Err(e) => {
                log::error!("Error running all algorithms: {}", e);
                std::process::exit(1);
            }
        }
        return;
    };

    let mut session = Session::new(board, mode);
    let stats = match session.find_path() {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Search rejected: {}", e);
            std::process::exit(1);
        }
    };

    if config.no_visualization {
        session.play(Duration::ZERO, |_, _| {});
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
        println!("Press Ctrl+C to stop the playback");
        let mut step = 0;
        session.play(Duration::from_millis(config.delay_ms), |board, tick| {
            step += 1;
            clear_screen();
            println!("=== GRID SEARCH PLAYBACK ===");
            match tick {
                Tick::Visited(pos) => println!("Step {} | expanding {}", step, pos),
                Tick::Path(pos) => println!("Step {} | path through {}", step, pos),
                Tick::Drained | Tick::Idle => println!("Step {} | playback complete", step),
            }
            print!("{}", board);
        });
    }

    println!("\n=== FINAL RESULTS ===");
    println!("{}", stats);
}

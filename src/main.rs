use std::{env, io, process};

use gsc_lang::gsc;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = io::stdout();
    let mut gsc = gsc::new(&mut stdout);

    match args.len() {
        n if n > 2 => {
            eprintln!("Usage: gsc [file.gsc]");
            process::exit(64);
        },
        2 => gsc.run_file(args[1].clone()),
        _ => gsc.run_prompt(),
    };
}

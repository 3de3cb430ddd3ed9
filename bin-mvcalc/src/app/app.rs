use std::fs::File;
use std::io::{BufReader, BufWriter};
use log::info;
use clap::Parser;

use super::err::*;
use super::session::Session;
use super::utils::*;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Read commands from this file instead of stdin.
    pub input: Option<String>,

    /// 0: off, 1: info, 2: debug, 3: trace.
    #[arg(long, default_value_t = 0)]
    pub log: u8
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn new_with(args: CliArgs) -> Self {
        App { args }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        ensure!(self.args.log <= 3, "--log must be in 0..=3, got {}", self.args.log);

        self.init_logger()?;

        info!("args: {:?}", self.args);
        info!("coeff-type: {}", std::any::type_name::<mvpoly::Coeff>());

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), Box<dyn std::error::Error>> {
        let l = self.args.log_level();
        if l != log::LevelFilter::Off {
            mvpoly::util::log::init_simple_logger(l)?;
        }
        Ok(())
    }

    fn dispatch(&self) -> Result<(), Box<dyn std::error::Error>> {
        let out = BufWriter::new(std::io::stdout().lock());
        let mut session = Session::new(out, std::io::stderr());

        match &self.args.input {
            Some(path) => {
                let file = match File::open(path) {
                    Ok(f) => f,
                    Err(e) => return err!("cannot open '{path}': {e}")
                };
                session.run(BufReader::new(file))?
            },
            None => session.run(std::io::stdin().lock())?
        }

        info!("lines: {}", session.line_no());

        Ok(())
    }
}

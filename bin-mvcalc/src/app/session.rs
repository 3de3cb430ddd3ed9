use std::io::{self, BufRead, Write};
use log::debug;
use mvpoly::{Calc, CalcError, Cmd, Poly};

/// Feeds input lines to a [`Calc`], writing results to `out`
/// and `ERROR <line> <MESSAGE>` diagnostics to `err`.
pub struct Session<W: Write, E: Write> {
    calc: Calc,
    out: W,
    err: E,
    line_no: usize
}

impl<W: Write, E: Write> Session<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { calc: Calc::new(), out, err, line_no: 0 }
    }

    pub fn calc(&self) -> &Calc {
        &self.calc
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break
            }
            self.feed(&buf)?;
        }

        self.out.flush()?;
        self.err.flush()
    }

    /// Handles one raw line, with or without its trailing newline.
    pub fn feed(&mut self, line: &[u8]) -> io::Result<()> {
        self.line_no += 1;

        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = String::from_utf8_lossy(line);

        debug!("{}: {:?}", self.line_no, line);

        match self.eval(&line) {
            Ok(Some(res)) => writeln!(self.out, "{res}"),
            Ok(None) => Ok(()),
            Err(e) => {
                debug!("{}: {e}", self.line_no);
                writeln!(self.err, "ERROR {} {e}", self.line_no)
            }
        }
    }

    fn eval(&mut self, line: &str) -> Result<Option<String>, CalcError> {
        let Some(c) = line.chars().next() else {
            return Ok(None)
        };

        if line.contains('\0') {
            return if c.is_ascii_alphabetic() {
                Err(Cmd::error_for(line))
            } else {
                Err(CalcError::WrongPoly)
            }
        }

        match c {
            '#' => Ok(None),
            c if c.is_ascii_alphabetic() => {
                let cmd: Cmd = line.parse()?;
                let res = self.calc.exec(&cmd)?;
                Ok(res.map(|r| r.to_string()))
            },
            c if c.is_ascii_digit() || c == '(' || c == '-' => {
                let p: Poly = line.parse()?;
                self.calc.push(p);
                Ok(None)
            },
            _ => Err(CalcError::WrongPoly)
        }
    }
}

//! Command dispatcher: tokenizes each input line and drives the
//! [`Engine`].

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::index::Engine;

/// Runs the command loop, reading lines from `input` and writing `report`
/// output to `output`, until `end` is read, input is exhausted, or a line
/// with an unrecognized first token is seen.
///
/// Lines are read and tokenized as raw bytes rather than validated UTF-8
/// text: identifiers are opaque byte strings, so a line containing
/// non-UTF-8 bytes in an identifier must parse the same as any other.
pub fn run(input: impl BufRead, output: impl Write) -> Result<()> {
    let mut engine = Engine::new();
    let mut output = io::BufWriter::new(output);
    let mut input = input;
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = input.read_until(b'\n', &mut line).map_err(|source| Error::Io {
            operation: "reading command line",
            source,
        })?;
        if n == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }

        let tokens = tokenize(&line);
        let Some(command) = tokens.first() else {
            continue;
        };

        match (command.as_slice(), tokens.len()) {
            (b"end", _) => break,
            (b"addent", 2) => engine.addent(&tokens[1]),
            (b"delent", 2) => engine.delent(&tokens[1]),
            (b"addrel", 4) => engine.addrel(&tokens[1], &tokens[2], &tokens[3]),
            (b"delrel", 4) => engine.delrel(&tokens[1], &tokens[2], &tokens[3]),
            (b"report", 1) => {
                engine.report(&mut output).map_err(|source| Error::Io {
                    operation: "writing report",
                    source,
                })?;
            }
            _ => {
                warn!(command = %String::from_utf8_lossy(command), "unrecognized command, terminating");
                break;
            }
        }
    }

    debug!("command loop finished");
    output.flush().map_err(|source| Error::Io {
        operation: "flushing output",
        source,
    })
}

/// Splits a line on ASCII whitespace and strips every `"` byte from every
/// token, reproducing the reference parser's unconditional stripping
/// rather than treating `"` as a paired delimiter.
fn tokenize(line: &[u8]) -> Vec<Vec<u8>> {
    line.split(u8::is_ascii_whitespace)
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.iter().copied().filter(|&b| b != b'"').collect())
        .collect()
}

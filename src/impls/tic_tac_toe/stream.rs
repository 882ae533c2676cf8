//
// This file is part of tic_tac_tally.
//
// tic_tac_tally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_tally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_tally. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

use std::io::{self, Read, Write};
use std::str;

use crate::error::{Error, FormatError, Result};
use crate::impls::tic_tac_toe::Board;

/// The length in bytes of a board's text form.
pub const RECORD_SIZE: usize = 12;

/// Fills `buffer` from `reader`, returning `false` on a clean end of stream.
fn read_record<R: Read>(reader: &mut R, buffer: &mut [u8; RECORD_SIZE]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(count) => filled += count,
            Err(ref error) if error.kind() == io::ErrorKind::Interrupted => (),
            Err(error) => return Err(error),
        }
    }

    match filled {
        0 => Ok(false),
        RECORD_SIZE => Ok(true),
        _ => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("stream ended {} bytes into a board record", filled),
        )),
    }
}

/// Reads back-to-back 12-byte board records until the end of the stream.
///
/// # Errors
/// Fails if the stream ends partway through a record, or if a record is not
/// a valid board.
pub fn read_boards<R: Read>(mut reader: R) -> Result<Vec<Board>> {
    let mut boards = Vec::new();
    let mut buffer = [0; RECORD_SIZE];

    while read_record(&mut reader, &mut buffer)? {
        // Bytes outside ASCII can't form a board; report the first one
        let text = str::from_utf8(&buffer).map_err(|error| {
            Error::Format(FormatError::IllegalCharacter(char::from(buffer[error.valid_up_to()])))
        })?;
        boards.push(Board::from_text(text)?);
    }

    Ok(boards)
}

/// Writes each board as a 12-byte record with no separator.
pub fn write_boards<'a, W, I>(mut writer: W, boards: I) -> Result<()> where
    W: Write,
    I: IntoIterator<Item = &'a Board> {
    for board in boards {
        writer.write_all(board.to_text().as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::error::{Error, FormatError};
    use crate::impls::tic_tac_toe::{Board, Mark};
    use super::*;

    #[test]
    fn test_stream_round_trip() {
        let boards = vec![
            Board::new(),
            "XXO\n OX\n X \n".parse::<Board>().unwrap(),
            "XXX\nOO \n   \n".parse::<Board>().unwrap(),
        ];

        let mut bytes = Vec::new();
        write_boards(&mut bytes, &boards).unwrap();
        assert_eq!(bytes.len(), 3 * RECORD_SIZE);

        assert_eq!(read_boards(Cursor::new(bytes)).unwrap(), boards);
    }

    #[test]
    fn test_stream_empty() {
        assert!(read_boards(Cursor::new(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn test_stream_truncated() {
        let mut bytes = b"X  \n   \n   \n".to_vec();
        bytes.extend_from_slice(b"O  \n");
        match read_boards(Cursor::new(bytes)) {
            Err(Error::Io(error)) => assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof),
            _ => panic!("expected an unexpected end of stream"),
        }
    }

    #[test]
    fn test_stream_bad_record() {
        match read_boards(Cursor::new(b"X  \n   \n  Q\n".to_vec())) {
            Err(Error::Format(FormatError::IllegalCharacter('Q'))) => (),
            other => panic!("unexpected result {:?}", other.map(|boards| boards.len())),
        }
        match read_boards(Cursor::new(b"X  \n   \n  \xff\n".to_vec())) {
            Err(Error::Format(_)) => (),
            _ => panic!("expected a format error"),
        }
    }

    #[test]
    fn test_stream_reads_marks() {
        let boards = read_boards(Cursor::new(b"   \n X \n   \n".to_vec())).unwrap();
        assert_eq!(boards[0].get(1, 1), Some(Mark::X));
    }
}

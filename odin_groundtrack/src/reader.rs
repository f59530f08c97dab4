/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! reading TLE records from files or piped text.
//! We accept 2-line and 3-line (name header) sets, CRLF or LF line endings and blank lines between records

use std::{fs::File, io::{self,BufRead,BufReader}, iter::Peekable, path::Path};
use tracing::debug;
use crate::{element::{Element,ParsedRecord,RejectedRecord}, errors::{tle_error,OdinGroundtrackError,Result}};

/// read all records from the provided source. This only fails on IO errors - malformed records are
/// returned as `Err(RejectedRecord)` entries
pub fn read_records<R: BufRead> (reader: R)->Result<Vec<ParsedRecord>> {
    let mut lines = numbered_lines(reader)?.into_iter().peekable();
    let mut records: Vec<ParsedRecord> = Vec::new();

    while let Some((line_no, line)) = lines.next() {
        if is_line(1, &line) {
            records.push( read_line2( &mut lines, line_no, None, &line));

        } else if is_line(2, &line) {
            records.push( Err( RejectedRecord::new( line_no, "line 2 without preceding line 1")));

        } else { // name header of a 3-line set
            match lines.next_if(|(_,l)| is_line(1, l)) {
                Some((_,line1)) => records.push( read_line2( &mut lines, line_no, Some(line.as_str()), &line1)),
                None => records.push( Err( RejectedRecord::new( line_no, format!("name line '{}' not followed by line 1", line.trim()))))
            }
        }
    }

    debug!("read {} TLE records", records.len());
    Ok(records)
}

pub fn read_records_from_path<P: AsRef<Path>> (path: P)->Result<Vec<ParsedRecord>> {
    let file = File::open(path.as_ref())?;
    read_records( BufReader::new(file))
}

pub fn read_records_from_stdin ()->Result<Vec<ParsedRecord>> {
    read_records( io::stdin().lock())
}

/// parse a text that has to contain exactly one (2- or 3-line) element set
pub fn parse_element (text: &str)->Result<Element> {
    let mut records = read_records( text.as_bytes())?;
    if records.len() > 1 {
        return Err( tle_error!("expected single TLE record, got {}", records.len()))
    }
    match records.pop() {
        Some(Ok(e)) => Ok(e),
        Some(Err(r)) => Err( tle_error!("{}", r)),
        None => Err( tle_error!("no TLE record"))
    }
}

fn read_line2<I> (lines: &mut Peekable<I>, line_no: usize, name: Option<&str>, line1: &str)->ParsedRecord 
    where I: Iterator<Item=(usize,String)>
{
    match lines.next_if(|(_,l)| is_line(2, l)) {
        Some((_,line2)) => Element::from_record( line_no, name, line1, &line2),
        None => Err( RejectedRecord::new( line_no, "truncated record (missing line 2)"))
    }
}

/// non-blank lines with their 1-based line numbers and trailing whitespace (incl. '\r') removed
fn numbered_lines<R: BufRead> (reader: R)->Result<Vec<(usize,String)>> {
    let mut list = Vec::new();
    for (i,line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if !line.is_empty() {
            list.push( (i+1, line.to_string()) );
        }
    }
    Ok(list)
}

fn is_line (n: u8, line: &str)->bool {
    let bs = line.as_bytes();
    bs.len() > 1 && bs[0] == b'0' + n && bs[1] == b' '
}

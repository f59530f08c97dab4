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

use std::fmt;
use chrono::{DateTime,Utc};
use crate::Epoch;

/// the fixed line length of the TLE format
pub const TLE_LINE_LEN: usize = 69;

/// outcome of reading one element record: either a parsed element or the reason why it was rejected.
/// Rejections are not errors - the caller decides whether to report and skip them
pub type ParsedRecord = std::result::Result<Element, RejectedRecord>;

/// a record that did not make it into an [`Element`]
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RejectedRecord {
    pub line: usize,  // 1-based line number of the first line of the record (0 if unknown)
    pub reason: String,
}

impl RejectedRecord {
    pub fn new (line: usize, reason: impl ToString)->Self {
        RejectedRecord { line, reason: reason.to_string() }
    }

    fn at_line (mut self, line: usize)->Self {
        self.line = line;
        self
    }
}

impl fmt::Display for RejectedRecord {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "rejected TLE record at line {}: {}", self.line, self.reason)
    }
}

/// an immutable two-line element set together with its parsed SGP4 elements
#[derive(Debug)]
pub struct Element {
    name: Option<String>,
    line1: String,
    line2: String,
    sat_num: u32,
    epoch: DateTime<Utc>,
    elements: sgp4::Elements,
}

impl Element {
    /// validate and parse a TLE. Structural checks (length, line numbers, catalog number, checksum) are done
    /// before the lines are handed to the SGP4 parser so that we get meaningful rejection reasons
    pub fn from_lines (name: Option<&str>, line1: &str, line2: &str)->ParsedRecord {
        let line1 = line1.trim_end();
        let line2 = line2.trim_end();

        check_line( 1, line1)?;
        check_line( 2, line2)?;

        let sat_num = catalog_number(line1)?;
        if catalog_number(line2)? != sat_num {
            return Err( RejectedRecord::new(0, format!("catalog numbers of line 1 and 2 differ ({} vs {})", &line1[2..7], &line2[2..7])))
        }

        let name = name.map(|s| s.trim()).map(|s| s.strip_prefix("0 ").unwrap_or(s).trim().to_string()).filter(|s| !s.is_empty());
        let elements = sgp4::Elements::from_tle( name.clone(), line1.as_bytes(), line2.as_bytes())
            .map_err(|e| RejectedRecord::new(0, format!("SGP4 element parse failed: {e}")))?;
        let epoch = elements.datetime.and_utc();

        Ok( Element { name, line1: line1.to_string(), line2: line2.to_string(), sat_num, epoch, elements } )
    }

    /// same as `from_lines` but with the record position set for diagnostics
    pub fn from_record (line_no: usize, name: Option<&str>, line1: &str, line2: &str)->ParsedRecord {
        Self::from_lines( name, line1, line2).map_err(|r| r.at_line(line_no))
    }

    pub fn name (&self)->Option<&str> { self.name.as_deref() }

    pub fn sat_num (&self)->u32 { self.sat_num }

    pub fn line1 (&self)->&str { &self.line1 }

    pub fn line2 (&self)->&str { &self.line2 }

    pub fn sgp4_elements (&self)->&sgp4::Elements { &self.elements }
}

impl Epoch for Element {
    fn epoch (&self)->DateTime<Utc> { self.epoch }
}

impl fmt::Display for Element {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} ({}) epoch {}", self.name.as_deref().unwrap_or("?"), self.sat_num, self.epoch.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

fn check_line (line_no: u8, line: &str)->std::result::Result<(),RejectedRecord> {
    if line.is_empty() {
        return Err( RejectedRecord::new( 0, format!("missing line {line_no}")))
    }
    if !line.is_ascii() {
        return Err( RejectedRecord::new( 0, format!("line {line_no} contains non-ASCII characters")))
    }
    if line.len() != TLE_LINE_LEN {
        return Err( RejectedRecord::new( 0, format!("line {line_no} has length {} (expected {TLE_LINE_LEN})", line.len())))
    }

    let bs = line.as_bytes();
    if bs[0] != b'0' + line_no || bs[1] != b' ' {
        return Err( RejectedRecord::new( 0, format!("line {line_no} does not start with '{line_no} '")))
    }

    let expected = (bs[68] as char).to_digit(10).ok_or_else(|| RejectedRecord::new( 0, format!("line {line_no} has no checksum digit")))?;
    let computed = checksum(line);
    if computed != expected {
        return Err( RejectedRecord::new( 0, format!("line {line_no} checksum mismatch (computed {computed}, expected {expected})")))
    }

    Ok(())
}

/// the TLE modulo-10 checksum over the first 68 columns: digits count with their value, '-' counts as 1
pub fn checksum (line: &str)->u32 {
    line.bytes().take(TLE_LINE_LEN - 1).map(|b| match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'-' => 1,
        _ => 0
    }).sum::<u32>() % 10
}

fn catalog_number (line: &str)->std::result::Result<u32,RejectedRecord> {
    line[2..7].trim().parse::<u32>().map_err(|_| RejectedRecord::new(0, format!("invalid catalog number '{}'", &line[2..7])))
}

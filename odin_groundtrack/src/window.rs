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
use chrono::{DateTime,TimeDelta,Utc};
use serde::{Serialize,Deserialize};

/// a closed interval of absolute time [start, end]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new (start: DateTime<Utc>, end: DateTime<Utc>)->Self {
        TimeWindow { start, end }
    }

    /// the window widened by `margin` on both sides
    pub fn extended (&self, margin: TimeDelta)->Self {
        TimeWindow { start: self.start - margin, end: self.end + margin }
    }

    /// inclusive on both ends
    pub fn contains (&self, t: &DateTime<Utc>)->bool {
        *t >= self.start && *t <= self.end
    }

    pub fn duration (&self)->TimeDelta {
        self.end - self.start
    }

    pub fn is_empty (&self)->bool {
        self.end <= self.start
    }

    pub fn with_end (&self, end: DateTime<Utc>)->Self {
        TimeWindow { start: self.start, end }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "[{} .. {}]", self.start.format("%Y-%m-%dT%H:%M:%SZ"), self.end.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

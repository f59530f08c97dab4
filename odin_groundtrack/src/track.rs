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
use crate::{geo::GeoPosition, TimeWindow};

/// one sample of a ground track
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TrackPoint {
    pub time: DateTime<Utc>,
    pub position: GeoPosition,
    pub element_index: usize, // sequence index of the element this point was propagated from
}

/// the output of a ground track simulation: chronologically ordered points, without any output format semantics
#[derive(Debug,Clone)]
pub struct GroundTrack {
    pub name: Option<String>,
    pub sat_num: Option<u32>,
    pub time_step: TimeDelta,
    pub window: TimeWindow,  // the effective (simulated) window
    pub points: Vec<TrackPoint>,
}

impl GroundTrack {
    pub fn new (time_step: TimeDelta, window: TimeWindow, points: Vec<TrackPoint>)->Self {
        GroundTrack { name: None, sat_num: None, time_step, window, points }
    }

    pub fn with_name (mut self, name: Option<String>)->Self {
        self.name = name;
        self
    }

    pub fn with_sat_num (mut self, sat_num: Option<u32>)->Self {
        self.sat_num = sat_num;
        self
    }

    pub fn len (&self)->usize { self.points.len() }

    pub fn is_empty (&self)->bool { self.points.is_empty() }

    pub fn iter (&self)->impl Iterator<Item=&TrackPoint> { self.points.iter() }

    pub fn start (&self)->Option<DateTime<Utc>> { self.points.first().map(|p| p.time) }

    pub fn end (&self)->Option<DateTime<Utc>> { self.points.last().map(|p| p.time) }
}

impl fmt::Display for GroundTrack {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "GroundTrack( name:{}, sat:{}, window:{}, step:{} s, n_points:{})",
            self.name.as_deref().unwrap_or("?"), self.sat_num.map(|n| n.to_string()).unwrap_or("?".to_string()),
            self.window, self.time_step.num_seconds(), self.points.len())
    }
}

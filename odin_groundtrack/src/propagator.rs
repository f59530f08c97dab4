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

use chrono::{DateTime,Utc};
use nalgebra::Vector3;
use satkit::{Instant,frametransform::qteme2itrf};
use crate::{
    element::Element, 
    errors::{propagation_error,Result}, 
    geo::{ecef_to_geodetic,GeoPosition}, 
    Epoch
};

/// the point-in-time propagation model used by the simulator.
/// Switching elements is an explicit state transition - `initialize` creates a new handle for the element that
/// becomes active, the previous handle is dropped by the caller. Propagation itself does not mutate anything
pub trait Propagator {
    type Element: Epoch;
    type Handle;

    /// create a propagation handle for the element with the given sequence index
    fn initialize (&self, index: usize, element: &Self::Element)->Result<Self::Handle>;

    /// geodetic position at time `t`. Failures are fatal for the ground track
    fn geodetic_position (&self, handle: &Self::Handle, t: DateTime<Utc>)->Result<GeoPosition>;
}

/// SGP4 propagation of TLE elements
#[derive(Debug,Default,Clone,Copy)]
pub struct Sgp4Propagator;

pub struct Sgp4Handle {
    index: usize,
    epoch: DateTime<Utc>,
    constants: sgp4::Constants,
}

impl Propagator for Sgp4Propagator {
    type Element = Element;
    type Handle = Sgp4Handle;

    fn initialize (&self, index: usize, element: &Element)->Result<Sgp4Handle> {
        let epoch = element.epoch();
        let constants = sgp4::Constants::from_elements( element.sgp4_elements())
            .map_err(|e| propagation_error( index, epoch, format!("invalid SGP4 elements: {e}")))?;

        Ok( Sgp4Handle { index, epoch, constants } )
    }

    fn geodetic_position (&self, handle: &Sgp4Handle, t: DateTime<Utc>)->Result<GeoPosition> {
        let minutes = (t - handle.epoch).num_milliseconds() as f64 / 60_000.0;
        let prediction = handle.constants.propagate( sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| propagation_error( handle.index, t, e))?;

        let [x,y,z] = prediction.position; // TEME in km
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err( propagation_error( handle.index, t, "non-finite SGP4 position"))
        }

        let p_ecef = teme_to_itrf( &Vector3::new( x * 1000.0, y * 1000.0, z * 1000.0), &t);
        Ok( ecef_to_geodetic( &p_ecef) )
    }
}

pub fn instant_from_datetime (dt: &DateTime<Utc>)->Instant {
    Instant::from_unixtime( dt.timestamp_millis() as f64 / 1000.0)
}

/// rotate a TEME position (SGP4 output frame) into the Earth-fixed ITRF frame at time `t`
pub fn teme_to_itrf (p: &Vector3<f64>, t: &DateTime<Utc>)->Vector3<f64> {
    qteme2itrf( &instant_from_datetime(t)).to_rotation_matrix() * p
}

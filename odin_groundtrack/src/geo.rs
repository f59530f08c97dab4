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

//! Earth-fixed (ECEF) to WGS-84 geodetic conversion of propagated positions

use std::fmt;
use nalgebra::Vector3;
use serde::{Serialize,Deserialize};

/// WGS-84 semi-major axis in meters
pub const EQUATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// WGS-84 first eccentricity squared
pub const E_EARTH_SQUARED: f64 = 6.6943799901377997e-3;

/// geodetic position of a track point
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPosition {
    pub longitude_deg: f64, // [-180,180)
    pub latitude_deg: f64,  // [-90,90]
    pub altitude_m: f64     // above WGS-84 ellipsoid
}

impl GeoPosition {
    pub fn new (longitude_deg: f64, latitude_deg: f64, altitude_m: f64)->Self {
        GeoPosition { longitude_deg: normalize_180(longitude_deg), latitude_deg, altitude_m }
    }
}

impl fmt::Display for GeoPosition {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{:10.4}°,{:9.4}°,{:10.0} m", self.longitude_deg, self.latitude_deg, self.altitude_m)
    }
}

pub fn normalize_180 (deg: f64)->f64 {
    let d = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if d >= 180.0 { d - 360.0 } else { d }
}

/// convert ECEF coordinates (meters) to WGS-84 geodetic coordinates.
/// see
///    Olson, D. K. (1996).
///    Converting Earth-Centered, Earth-Fixed Coordinates to Geodetic Coordinates.
///    IEEE Transactions on Aerospace and Electronic Systems, 32(1), 473–476. https://doi.org/10.1109/7.481290
pub fn ecef_to_geodetic (p: &Vector3<f64>)->GeoPosition {
    let a  = EQUATORIAL_EARTH_RADIUS;
    let e2 = E_EARTH_SQUARED;
    let a1 = 4.2697672707157535e+4;
    let a2 = 1.8230912546075455e+9;
    let a3 = 1.4291722289812413e+2;
    let a4 = 4.5577281365188637e+9;
    let a5 = 4.2840589930055659e+4;
    let a6 = 9.9330562000986220e-1;

    let (x,y,z) = (p.x, p.y, p.z);
    let zp = z.abs();
    let w2 = x*x + y*y;
    let w = w2.sqrt();
    let z2 = z*z;
    let r2 = w2 + z2;
    let r = r2.sqrt();
    let lon = y.atan2(x);

    if r < 100000.0 { // the approximation does not hold close to the center - no orbit gets here
        let lat = if r > 0.0 { (z / r).asin() } else { 0.0 };
        return GeoPosition::new( lon.to_degrees(), lat.to_degrees(), r - a)
    }

    let s2 = z2 / r2;
    let c2 = w2 / r2;
    let mut u = a2 / r;
    let mut v = a3 - a4 / r;

    let (mut lat, s, c, ss) = if c2 > 0.3 {
        let s = (zp/r) * (1.0 + c2*(a1 + u + s2*v)/r);
        let ss = s*s;
        (s.asin(), s, (1.0 - ss).sqrt(), ss)
    } else {
        let c = (w/r) * (1.0 - s2*(a5 - u - c2*v)/r);
        let ss = 1.0 - c*c;
        (c.acos(), ss.sqrt(), c, ss)
    };

    let g = 1.0 - e2*ss;
    let rg = a / g.sqrt();
    let rf = a6 * rg;
    u = w - rg*c;
    v = zp - rf*s;
    let f = c*u + s*v;
    let m = c*v - s*u;
    let dp = m / (rf/g + f);

    lat += dp;
    let alt = f + m*dp/2.0;
    if z < 0.0 { lat = -lat }

    GeoPosition::new( lon.to_degrees(), lat.to_degrees(), alt)
}

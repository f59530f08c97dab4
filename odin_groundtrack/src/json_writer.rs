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

use std::fmt::Write;

/// a minimal streaming JSON writer that builds documents from nested closures.
/// Separators are inserted automatically based on the last written byte, hence there never is a separator
/// before a closing bracket, no matter how many (if any) elements get written. Use like so:
/// ```
///     use odin_groundtrack::json_writer::JsonWriter;
///     let mut w = JsonWriter::new();
///     w.write_object( |w| {
///         w.write_str_field( "type", "LineString");
///         w.write_array_field( "coordinates", |w| {
///             w.write_f64_array( &[-122.5, 37.3], 4);
///             w.write_f64_array( &[-122.6, 37.4], 4);
///         });
///     });
///     assert_eq!( w.as_str(), r#"{"type":"LineString","coordinates":[[-122.5000,37.3000],[-122.6000,37.4000]]}"#);
/// ```
pub struct JsonWriter {
    buf: String
}

impl JsonWriter {
    pub fn new ()->Self {
        JsonWriter { buf: String::new() }
    }

    pub fn with_capacity (len: usize)->Self {
        JsonWriter { buf: String::with_capacity(len) }
    }

    pub fn write_object (&mut self, f: impl FnOnce(&mut JsonWriter)) {
        self.check_separator();
        self.buf.push('{');
        f(self);
        self.buf.push('}');
    }

    pub fn write_object_field (&mut self, prop_name: &str, f: impl FnOnce(&mut JsonWriter)) {
        self.write_prop_name( prop_name);
        self.buf.push('{');
        f(self);
        self.buf.push('}');
    }

    pub fn write_array (&mut self, f: impl FnOnce(&mut JsonWriter)) {
        self.check_separator();
        self.buf.push('[');
        f(self);
        self.buf.push(']');
    }

    pub fn write_array_field (&mut self, prop_name: &str, f: impl FnOnce(&mut JsonWriter)) {
        self.write_prop_name( prop_name);
        self.buf.push('[');
        f(self);
        self.buf.push(']');
    }

    pub fn write_str_field (&mut self, prop_name: &str, value: &str) {
        self.write_prop_name( prop_name);
        self.push_quoted( value);
    }

    /// integers and other values whose Display output is valid JSON
    pub fn write_num_field<T: std::fmt::Display> (&mut self, prop_name: &str, value: T) {
        self.write_prop_name( prop_name);
        let _ = write!( self.buf, "{value}");
    }

    pub fn write_f64_field (&mut self, prop_name: &str, value: f64, decimals: usize) {
        self.write_prop_name( prop_name);
        self.push_f64( value, decimals);
    }

    pub fn write_null_field (&mut self, prop_name: &str) {
        self.write_prop_name( prop_name);
        self.buf.push_str("null");
    }

    pub fn write_f64 (&mut self, value: f64, decimals: usize) {
        self.check_separator();
        self.push_f64( value, decimals);
    }

    /// a compact array of fixed precision numbers, e.g. a coordinate tuple
    pub fn write_f64_array (&mut self, values: &[f64], decimals: usize) {
        self.write_array( |w| {
            for v in values { w.write_f64( *v, decimals) }
        });
    }

    pub fn as_str (&self)->&str { self.buf.as_str() }

    pub fn len (&self)->usize { self.buf.len() }

    pub fn is_empty (&self)->bool { self.buf.is_empty() }

    #[inline] fn check_separator (&mut self) {
        if let Some(b) = self.buf.as_bytes().last() {
            if *b != b'{' && *b != b'[' && *b != b',' && *b != b':' {
                self.buf.push(',');
            }
        }
    }

    fn write_prop_name (&mut self, prop_name: &str) {
        self.check_separator();
        self.push_quoted( prop_name);
        self.buf.push(':');
    }

    fn push_quoted (&mut self, s: &str) {
        // serializing a str can't fail
        let _ = write!( self.buf, "{}", serde_json::Value::from(s));
    }

    fn push_f64 (&mut self, v: f64, decimals: usize) {
        if v.is_finite() {
            let _ = write!( self.buf, "{v:.decimals$}");
        } else {
            self.buf.push_str("null"); // JSON has no NaN or infinity
        }
    }
}

impl Default for JsonWriter {
    fn default ()->Self { JsonWriter::new() }
}

impl From<JsonWriter> for String {
    fn from (w: JsonWriter)->String { w.buf }
}

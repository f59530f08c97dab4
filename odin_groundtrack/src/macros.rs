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

/// syntactic sugar macro for clap based command line interface definition
/// ```ignore
/// define_cli! { ARGS [about="my silly prog"] =
///   verbose: bool            [help="run verbose", short, long],
///   time_step: Option<i64>   [help="time step in seconds", short='t', long],
///   file: String             [help="pathname of input"]
/// }
///
/// fn main () {
///    let file = &ARGS.file;  // parsed on first access, exits on -h or invalid arguments
///    ...
/// }
/// ```
/// expands into:
/// ```ignore
/// #[derive(clap::Parser)]
/// #[command(about = "my silly prog")]
/// struct CliOpts {
///     #[arg(help = "run verbose", short, long)]
///     verbose: bool,
///     ...
/// }
/// static ARGS: std::sync::LazyLock<CliOpts> = std::sync::LazyLock::new(|| <CliOpts as clap::Parser>::parse());
/// ```
#[macro_export]
macro_rules! define_cli {
    ($name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )? $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        #[derive(clap::Parser)]
        #[command( $( $sopt $(=$sx)? ),* )]
        struct CliOpts {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])?
                $fname : $ftype,
            )*
        }
        static $name: std::sync::LazyLock<CliOpts> = std::sync::LazyLock::new(|| <CliOpts as clap::Parser>::parse());
    }
}

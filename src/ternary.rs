// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A one-line conditional.  The wraparound lookups in the pixel grid
/// and the clamped candidates in the seam search are both tables of
/// edge cases, and they read far better as a column of `cq!`s than
/// as the nested blocks `cargo fmt` would make of plain `if`s.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

//! Core geometric types for the clipping engine: points, rectangles,
//! fill rules, the crate's error type, and the small numeric helpers
//! (cross/dot products, 128-bit-exact comparisons, bounds, scaling)
//! the sweep engine and its façade build on.

use num_traits::{Float, Num, Zero};
use std::fmt::Debug;
use thiserror::Error;

/// Fill rule determines how polygons with self-intersections are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub enum FillRule {
    /// Even-odd fill rule (also known as Alternate)
    #[default]
    EvenOdd,
    /// Non-zero fill rule (also known as Winding)
    NonZero,
    /// Positive fill rule
    Positive,
    /// Negative fill rule
    Negative,
}

/// Errors raised by the clipping engine.
///
/// Precision/scale/range variants are raised synchronously from `addPath`
/// or façade construction; `InternalInvariant` is raised (via `do_error`)
/// when a sweep-time consistency check fails, which aborts `execute` and
/// leaves the engine's success flag false.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipperError {
    #[error("Precision exceeds the permitted range")]
    Precision,
    #[error("Values exceed permitted range")]
    Range,
    #[error("Invalid scale (either 0 or too large)")]
    Scale,
    #[error("There must be 2 values for each coordinate")]
    NonPair,
    #[error("There is an undefined error in Clipper2")]
    Undefined,
}

/// Map a legacy bitflag error code onto a [`ClipperError`] variant.
pub fn do_error(error_code: i32) -> Result<(), ClipperError> {
    use errors::*;

    let err = match error_code {
        PRECISION_ERROR_I => ClipperError::Precision,
        SCALE_ERROR_I => ClipperError::Scale,
        NON_PAIR_ERROR_I => ClipperError::NonPair,
        UNDEFINED_ERROR_I => ClipperError::Undefined,
        RANGE_ERROR_I => ClipperError::Range,
        _ => {
            log::warn!("unrecognized clipper error code {error_code}");
            ClipperError::Undefined
        }
    };
    log::warn!("clipper error: {err}");
    Err(err)
}

/// Constants matching C++ implementation
/// Direct port from clipper.core.h line 55-71
pub mod constants {
    /// PI constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Maximum decimal precision for clipper operations
    pub const CLIPPER2_MAX_DEC_PRECISION: i32 = 8;

    /// Maximum coordinate value (INT64_MAX >> 2)
    pub const MAX_COORD: i64 = i64::MAX >> 2;
    /// Minimum coordinate value  
    pub const MIN_COORD: i64 = -MAX_COORD;
    /// Invalid coordinate sentinel
    pub const INVALID: i64 = i64::MAX;
    /// Maximum coordinate as double
    pub const MAX_COORD_D: f64 = MAX_COORD as f64;
    /// Minimum coordinate as double
    pub const MIN_COORD_D: f64 = MIN_COORD as f64;
    /// Maximum double value
    pub const MAX_DBL: f64 = f64::MAX;
}

/// Error constants matching C++ implementation
pub mod errors {
    /// Precision exceeds the permitted range
    pub const PRECISION_ERROR: &str = "Precision exceeds the permitted range";
    /// Values exceed permitted range
    pub const RANGE_ERROR: &str = "Values exceed permitted range";
    /// Invalid scale (either 0 or too large)
    pub const SCALE_ERROR: &str = "Invalid scale (either 0 or too large)";
    /// There must be 2 values for each coordinate
    pub const NON_PAIR_ERROR: &str = "There must be 2 values for each coordinate";
    /// There is an undefined error in Clipper2
    pub const UNDEFINED_ERROR: &str = "There is an undefined error in Clipper2";

    /// Error codes (2^n) - non-fatal
    pub const PRECISION_ERROR_I: i32 = 1;
    /// Error codes (2^n) - non-fatal  
    pub const SCALE_ERROR_I: i32 = 2;
    /// Error codes (2^n) - non-fatal
    pub const NON_PAIR_ERROR_I: i32 = 4;
    /// Error codes (2^n) - fatal
    pub const UNDEFINED_ERROR_I: i32 = 32;
    /// Error codes (2^n)
    pub const RANGE_ERROR_I: i32 = 64;
}

/// 2D point with generic numeric type.
///
/// Carries an optional `z` tag, propagated through the engine but never
/// consulted by geometry (cross/dot products, point-in-polygon, AEL
/// ordering all ignore it). Equality and ordering are x/y only.
/// Direct port from clipper.core.h line 117
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: PartialEq> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T> Point<T>
where
    T: Num + Copy,
{
    /// Create a new point with a zeroed z-tag
    pub fn new(x: T, y: T) -> Self {
        Self {
            x,
            y,
            z: T::zero(),
        }
    }

    /// Create a new point carrying an explicit z-tag
    pub fn new_z(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Create a zero point
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }
}

impl<T> Point<T>
where
    T: Num + Copy,
{
    /// Add two points
    pub fn add_point(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: T::zero(),
        }
    }

    /// Subtract two points
    pub fn sub_point(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: T::zero(),
        }
    }

    /// Negate a point
    pub fn negate(self) -> Self {
        Self {
            x: T::zero() - self.x,
            y: T::zero() - self.y,
            z: T::zero(),
        }
    }
}

impl<T> Point<T>
where
    T: Num + Copy + PartialOrd,
{
    /// Scale a point by a floating-point factor  
    pub fn scale<F>(self, scale: F) -> Point<F>
    where
        F: Float,
        T: Into<F>,
    {
        Point {
            x: self.x.into() * scale,
            y: self.y.into() * scale,
            z: self.z.into(),
        }
    }
}

// Operator overloads matching C++
impl<T> std::ops::Add for Point<T>
where
    T: Num + Copy,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_point(rhs)
    }
}

impl<T> std::ops::Sub for Point<T>
where
    T: Num + Copy,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_point(rhs)
    }
}

impl<T> std::ops::Neg for Point<T>
where
    T: Num + Copy,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Rectangle with generic numeric type
/// Direct port from clipper.core.h line 295
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Rect<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T> Rect<T>
where
    T: Num + Copy + PartialOrd,
{
    /// Create a new rectangle
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle, valid by default or invalid if specified
    /// Direct port from clipper.core.h line 307
    pub fn new_with_validity(is_valid: bool) -> Self
    where
        T: num_traits::Bounded,
    {
        if is_valid {
            Self {
                left: T::zero(),
                top: T::zero(),
                right: T::zero(),
                bottom: T::zero(),
            }
        } else {
            Self {
                left: T::max_value(),
                top: T::max_value(),
                right: T::min_value(),
                bottom: T::min_value(),
            }
        }
    }

    /// Create an invalid rectangle
    /// Direct port from clipper.core.h line 320
    pub fn invalid() -> Self
    where
        T: num_traits::Bounded,
    {
        Self {
            left: T::max_value(),
            top: T::max_value(),
            right: T::min_value(),
            bottom: T::min_value(),
        }
    }

    /// Get midpoint of rectangle
    /// Direct port from clipper.core.h line 336
    pub fn mid_point(&self) -> Point<T> {
        Point {
            x: (self.left + self.right) / (T::one() + T::one()),
            y: (self.top + self.bottom) / (T::one() + T::one()),
            z: T::zero(),
        }
    }

    /// Convert rectangle to path (clockwise from top-left)
    /// Direct port from clipper.core.h line 341
    pub fn as_path(&self) -> Path<T> {
        vec![
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Check if point is contained within rectangle (exclusive bounds)
    /// Direct port from clipper.core.h line 352
    pub fn contains_point(&self, pt: &Point<T>) -> bool {
        pt.x > self.left && pt.x < self.right && pt.y > self.top && pt.y < self.bottom
    }

    /// Check if another rectangle is fully contained within this rectangle
    /// Direct port from clipper.core.h line 357
    pub fn contains_rect(&self, rec: &Rect<T>) -> bool {
        rec.left >= self.left
            && rec.right <= self.right
            && rec.top >= self.top
            && rec.bottom <= self.bottom
    }

    /// Check if this rectangle intersects with another
    /// Direct port from clipper.core.h line 372
    pub fn intersects(&self, rec: &Rect<T>) -> bool {
        let max_left = if self.left > rec.left {
            self.left
        } else {
            rec.left
        };
        let min_right = if self.right < rec.right {
            self.right
        } else {
            rec.right
        };
        let max_top = if self.top > rec.top {
            self.top
        } else {
            rec.top
        };
        let min_bottom = if self.bottom < rec.bottom {
            self.bottom
        } else {
            rec.bottom
        };

        max_left <= min_right && max_top <= min_bottom
    }

    /// Check if rectangle is valid (not using max sentinel values)
    /// Direct port from clipper.core.h line 329
    pub fn is_valid(&self) -> bool
    where
        T: num_traits::Bounded + PartialEq,
    {
        self.left != T::max_value()
    }

    /// Get width of rectangle
    pub fn width(&self) -> T {
        self.right - self.left
    }

    /// Get height of rectangle  
    pub fn height(&self) -> T {
        self.bottom - self.top
    }

    /// Set width, adjusting right edge
    pub fn set_width(&mut self, width: T) {
        self.right = self.left + width;
    }

    /// Set height, adjusting bottom edge
    pub fn set_height(&mut self, height: T) {
        self.bottom = self.top + height;
    }

    /// Check if rectangle is empty
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

impl<T> Rect<T>
where
    T: Float + Copy,
{
    /// Scale rectangle by floating-point factor
    pub fn scale(&mut self, scale: T) {
        self.left = self.left * scale;
        self.top = self.top * scale;
        self.right = self.right * scale;
        self.bottom = self.bottom * scale;
    }
}

// Implement PartialEq for Rect to match C++ operator==
// Direct port from clipper.core.h line 378
impl<T> PartialEq for Rect<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left
            && self.right == other.right
            && self.top == other.top
            && self.bottom == other.bottom
    }
}

// Implement += operator for Rect (union operation)
// Direct port from clipper.core.h line 383
impl<T> std::ops::AddAssign for Rect<T>
where
    T: Num + Copy + PartialOrd,
{
    fn add_assign(&mut self, other: Self) {
        self.left = if self.left < other.left {
            self.left
        } else {
            other.left
        };
        self.top = if self.top < other.top {
            self.top
        } else {
            other.top
        };
        self.right = if self.right > other.right {
            self.right
        } else {
            other.right
        };
        self.bottom = if self.bottom > other.bottom {
            self.bottom
        } else {
            other.bottom
        };
    }
}

// Type aliases matching C++ implementation
pub type Point64 = Point<i64>;
pub type PointD = Point<f64>;
pub type Rect64 = Rect<i64>;
pub type RectD = Rect<f64>;

/// Vector of points forming a path
pub type Path<T> = Vec<Point<T>>;
pub type Path64 = Path<i64>;
pub type PathD = Path<f64>;

/// Vector of paths
pub type Paths<T> = Vec<Path<T>>;
pub type Paths64 = Paths<i64>;
pub type PathsD = Paths<f64>;

/// Invalid point constants
pub const INVALID_POINT64: Point64 = Point64 {
    x: i64::MAX,
    y: i64::MAX,
    z: 0,
};

pub const INVALID_POINTD: PointD = PointD {
    x: f64::MAX,
    y: f64::MAX,
    z: 0.0,
};

/// Calculate midpoint between two points
/// Direct port from clipper.core.h line 278
#[inline]
pub fn mid_point<T>(p1: Point<T>, p2: Point<T>) -> Point<T>
where
    T: Num + Copy,
{
    Point {
        x: (p1.x + p2.x) / (T::one() + T::one()),
        y: (p1.y + p2.y) / (T::one() + T::one()),
        z: T::zero(),
    }
}

/// Helper trait for converting to f64 - matching C++ static_cast<double> behavior
pub trait ToF64 {
    fn to_f64(self) -> f64;
}

impl ToF64 for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl ToF64 for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl ToF64 for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl ToF64 for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Calculate cross product of two vectors formed by three points  
/// Direct port from clipper.core.h line 810
#[inline]
pub fn cross_product_three_points<T>(pt1: Point<T>, pt2: Point<T>, pt3: Point<T>) -> f64
where
    T: Copy + ToF64,
{
    let pt1_x = pt1.x.to_f64();
    let pt1_y = pt1.y.to_f64();
    let pt2_x = pt2.x.to_f64();
    let pt2_y = pt2.y.to_f64();
    let pt3_x = pt3.x.to_f64();
    let pt3_y = pt3.y.to_f64();

    (pt2_x - pt1_x) * (pt3_y - pt2_y) - (pt2_y - pt1_y) * (pt3_x - pt2_x)
}

/// Calculate cross product of two vectors
/// Direct port from clipper.core.h line 816
#[inline]
pub fn cross_product_two_vectors<T>(vec1: Point<T>, vec2: Point<T>) -> f64
where
    T: Copy + ToF64,
{
    let vec1_x = vec1.x.to_f64();
    let vec1_y = vec1.y.to_f64();
    let vec2_x = vec2.x.to_f64();
    let vec2_y = vec2.y.to_f64();

    vec1_y * vec2_x - vec2_y * vec1_x
}

/// Calculate dot product of two vectors formed by three points
/// Direct port from clipper.core.h line 822
#[inline]
pub fn dot_product_three_points<T>(pt1: Point<T>, pt2: Point<T>, pt3: Point<T>) -> f64
where
    T: Copy + ToF64,
{
    let pt1_x = pt1.x.to_f64();
    let pt1_y = pt1.y.to_f64();
    let pt2_x = pt2.x.to_f64();
    let pt2_y = pt2.y.to_f64();
    let pt3_x = pt3.x.to_f64();
    let pt3_y = pt3.y.to_f64();

    (pt2_x - pt1_x) * (pt3_x - pt2_x) + (pt2_y - pt1_y) * (pt3_y - pt2_y)
}

/// Calculate dot product of two vectors
/// Direct port from clipper.core.h line 828
#[inline]
pub fn dot_product_two_vectors<T>(vec1: Point<T>, vec2: Point<T>) -> f64
where
    T: Copy + ToF64,
{
    let vec1_x = vec1.x.to_f64();
    let vec1_y = vec1.y.to_f64();
    let vec2_x = vec2.x.to_f64();
    let vec2_y = vec2.y.to_f64();

    vec1_x * vec2_x + vec1_y * vec2_y
}

/// Helper for returning -1, 0, or 1 based on sign
/// Direct port from clipper.core.h line 697  
#[inline]
pub fn tri_sign(x: i64) -> i32 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

/// 128-bit unsigned integer struct for high-precision multiplication
/// Direct port from clipper.core.h line 685
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UInt128Struct {
    pub lo: u64,
    pub hi: u64,
}

/// Multiply two 64-bit unsigned integers to get 128-bit result
/// Direct port from clipper.core.h line 690
#[inline]
pub fn multiply_u64(a: u64, b: u64) -> UInt128Struct {
    // Lambdas from C++: lo = x & 0xFFFFFFFF, hi = x >> 32
    let lo = |x: u64| -> u64 { x & 0xFFFFFFFF };
    let hi = |x: u64| -> u64 { x >> 32 };

    let x1 = lo(a) * lo(b);
    let x2 = hi(a) * lo(b) + hi(x1);
    let x3 = lo(a) * hi(b) + lo(x2);
    let lobits = lo(x3) << 32 | lo(x1);
    let hibits = hi(a) * hi(b) + hi(x2) + hi(x3);

    UInt128Struct {
        lo: lobits,
        hi: hibits,
    }
}

/// Check if products a*b and c*d are equal using exact 128-bit arithmetic
/// Direct port from clipper.core.h line 703
#[inline]
pub fn products_are_equal(a: i64, b: i64, c: i64, d: i64) -> bool {
    // For 128-bit capable systems, use i128 for simplicity
    #[cfg(target_pointer_width = "64")]
    {
        let ab = a as i128 * b as i128;
        let cd = c as i128 * d as i128;
        ab == cd
    }

    // For other systems or if we want exact C++ behavior, use the manual implementation
    #[cfg(not(target_pointer_width = "64"))]
    {
        // Convert to unsigned for overflow calculations
        let abs_a = a.unsigned_abs();
        let abs_b = b.unsigned_abs();
        let abs_c = c.unsigned_abs();
        let abs_d = d.unsigned_abs();

        let ab = multiply_u64(abs_a, abs_b);
        let cd = multiply_u64(abs_c, abs_d);

        // Calculate signs - important to differentiate 0 values
        let sign_ab = tri_sign(a) * tri_sign(b);
        let sign_cd = tri_sign(c) * tri_sign(d);

        ab == cd && sign_ab == sign_cd
    }
}

/// Strip duplicate consecutive points from a path
/// Direct port from clipper.core.h line 658
#[inline]
pub fn strip_duplicates_path<T>(path: &mut Path<T>, is_closed_path: bool)
where
    T: PartialEq + Clone,
{
    // Use stable dedup to remove consecutive duplicates
    path.dedup();

    // For closed paths, also remove duplicates between last and first points
    if is_closed_path {
        while path.len() > 1 && path.last() == path.first() {
            path.pop();
        }
    }
}

/// Strip duplicate consecutive points from multiple paths
/// Direct port from clipper.core.h line 670
#[inline]
pub fn strip_duplicates_paths<T>(paths: &mut Paths<T>, is_closed_path: bool)
where
    T: PartialEq + Clone,
{
    for path in paths.iter_mut() {
        strip_duplicates_path(path, is_closed_path);
    }
}

/// Check if precision is within acceptable range and adjust if needed
/// Direct port from clipper.core.h line 682
#[inline]
pub fn check_precision_range(precision: &mut i32, error_code: &mut i32) {
    use constants::CLIPPER2_MAX_DEC_PRECISION;
    use errors::PRECISION_ERROR_I;

    if *precision >= -CLIPPER2_MAX_DEC_PRECISION && *precision <= CLIPPER2_MAX_DEC_PRECISION {
        return;
    }

    *error_code |= PRECISION_ERROR_I; // non-fatal error

    // In Rust, we return the error instead of calling DoError with exceptions
    // This matches the C++ behavior when exceptions are disabled

    let clamped = if *precision > 0 {
        CLIPPER2_MAX_DEC_PRECISION
    } else {
        -CLIPPER2_MAX_DEC_PRECISION
    };
    log::warn!(
        "rounding decimal precision {} out of range, clamped to {}",
        *precision,
        clamped
    );
    *precision = clamped;
}

/// Check precision range without error code (convenience function)
/// Direct port from clipper.core.h line 691
#[inline]
pub fn check_precision_range_simple(precision: &mut i32) {
    let mut error_code = 0;
    check_precision_range(precision, &mut error_code);
}

/// Calculate the bounding rectangle of a path
/// Direct port from clipper.core.h line 432
#[inline]
pub fn get_bounds_path<T>(path: &Path<T>) -> Rect<T>
where
    T: Copy + PartialOrd + num_traits::Bounded + num_traits::Num,
{
    let mut xmin = T::max_value();
    let mut ymin = T::max_value();
    let mut xmax = T::min_value();
    let mut ymax = T::min_value();

    for p in path {
        if p.x < xmin {
            xmin = p.x;
        }
        if p.x > xmax {
            xmax = p.x;
        }
        if p.y < ymin {
            ymin = p.y;
        }
        if p.y > ymax {
            ymax = p.y;
        }
    }

    Rect::new(xmin, ymin, xmax, ymax)
}

/// Calculate the bounding rectangle of multiple paths
/// Direct port from clipper.core.h line 449
#[inline]
pub fn get_bounds_paths<T>(paths: &Paths<T>) -> Rect<T>
where
    T: Copy + PartialOrd + num_traits::Bounded + num_traits::Num,
{
    let mut xmin = T::max_value();
    let mut ymin = T::max_value();
    let mut xmax = T::min_value();
    let mut ymax = T::min_value();

    for path in paths {
        for p in path {
            if p.x < xmin {
                xmin = p.x;
            }
            if p.x > xmax {
                xmax = p.x;
            }
            if p.y < ymin {
                ymin = p.y;
            }
            if p.y > ymax {
                ymax = p.y;
            }
        }
    }

    Rect::new(xmin, ymin, xmax, ymax)
}

/// Calculate the bounding rectangle of a path with type conversion
/// Direct port from clipper.core.h line 467
#[inline]
pub fn get_bounds_path_convert<T, T2>(path: &Path<T2>) -> Rect<T>
where
    T: Copy + PartialOrd + num_traits::Bounded + num_traits::Num,
    T2: Copy + Into<T>,
{
    let mut xmin = T::max_value();
    let mut ymin = T::max_value();
    let mut xmax = T::min_value();
    let mut ymax = T::min_value();

    for p in path {
        let x: T = p.x.into();
        let y: T = p.y.into();
        if x < xmin {
            xmin = x;
        }
        if x > xmax {
            xmax = x;
        }
        if y < ymin {
            ymin = y;
        }
        if y > ymax {
            ymax = y;
        }
    }

    Rect::new(xmin, ymin, xmax, ymax)
}

/// Calculate the bounding rectangle of multiple paths with type conversion
/// Direct port from clipper.core.h line 484
#[inline]
pub fn get_bounds_paths_convert<T, T2>(paths: &Paths<T2>) -> Rect<T>
where
    T: Copy + PartialOrd + num_traits::Bounded + num_traits::Num,
    T2: Copy + Into<T>,
{
    let mut xmin = T::max_value();
    let mut ymin = T::max_value();
    let mut xmax = T::min_value();
    let mut ymax = T::min_value();

    for path in paths {
        for p in path {
            let x: T = p.x.into();
            let y: T = p.y.into();
            if x < xmin {
                xmin = x;
            }
            if x > xmax {
                xmax = x;
            }
            if y < ymin {
                ymin = y;
            }
            if y > ymax {
                ymax = y;
            }
        }
    }

    Rect::new(xmin, ymin, xmax, ymax)
}

/// Square a value, as an `f64` regardless of the input's numeric domain.
#[inline]
pub fn sqr<T>(value: T) -> f64
where
    T: Copy + ToF64,
{
    let v = value.to_f64();
    v * v
}

/// Signed area of a closed path (shoelace formula).
#[inline]
pub fn area<T>(path: &Path<T>) -> f64
where
    T: Copy + ToF64,
{
    if path.len() < 3 {
        return 0.0;
    }
    let mut result = 0.0;
    let mut prev = path[path.len() - 1];
    for &pt in path {
        result += (prev.y.to_f64() + pt.y.to_f64()) * (prev.x.to_f64() - pt.x.to_f64());
        prev = pt;
    }
    result * 0.5
}

/// Sum of signed areas of every path.
#[inline]
pub fn area_paths<T>(paths: &Paths<T>) -> f64
where
    T: Copy + ToF64,
{
    paths.iter().map(area).sum()
}

/// Whether a path's signed area is non-negative.
#[inline]
pub fn is_positive<T>(path: &Path<T>) -> bool
where
    T: Copy + ToF64,
{
    area(path) >= 0.0
}

/// Exact sign of the cross product `(pt2-pt1) x (pt3-pt2)`.
///
/// Uses 128-bit intermediate products so the sign is exact even near the
/// safe-coordinate bound, where the plain `f64` cross product can lose
/// precision.
#[inline]
pub fn cross_product_sign(pt1: Point64, pt2: Point64, pt3: Point64) -> i32 {
    let a = (pt2.x - pt1.x) as i128 * (pt3.y - pt2.y) as i128;
    let b = (pt2.y - pt1.y) as i128 * (pt3.x - pt2.x) as i128;
    let d = a - b;
    if d > 0 {
        1
    } else if d < 0 {
        -1
    } else {
        0
    }
}

/// Whether three points are collinear (exact, via [`cross_product_sign`]).
#[inline]
pub fn is_collinear(pt1: Point64, pt2: Point64, pt3: Point64) -> bool {
    cross_product_sign(pt1, pt2, pt3) == 0
}

/// Round to the nearest integer, ties to even, matching the engine's
/// rounding policy for synthesized intersection points.
#[inline]
fn round_half_even_i64(v: f64) -> i64 {
    let floor = v.floor();
    let diff = v - floor;
    if diff < 0.5 {
        floor as i64
    } else if diff > 0.5 {
        floor as i64 + 1
    } else {
        let f = floor as i64;
        if f % 2 == 0 {
            f
        } else {
            f + 1
        }
    }
}

/// Whether segment `seg1a-seg1b` crosses segment `seg2a-seg2b`.
///
/// `inclusive=false` requires a proper crossing (endpoints touching or
/// collinear overlap don't count); `inclusive=true` additionally rejects
/// the degenerate case where all four cross products are zero (fully
/// collinear segments).
#[inline]
pub fn segments_intersect(
    seg1a: Point64,
    seg1b: Point64,
    seg2a: Point64,
    seg2b: Point64,
    inclusive: bool,
) -> bool {
    let res1 = cross_product_sign(seg1a, seg2a, seg2b);
    let res2 = cross_product_sign(seg1b, seg2a, seg2b);
    let res3 = cross_product_sign(seg2a, seg1a, seg1b);
    let res4 = cross_product_sign(seg2b, seg1a, seg1b);

    if inclusive {
        if res1 * res2 > 0 || res3 * res4 > 0 {
            return false;
        }
        res1 != 0 || res2 != 0 || res3 != 0 || res4 != 0
    } else {
        res1 * res2 < 0 && res3 * res4 < 0
    }
}

/// Compute the point where infinite lines `ln1a-ln1b` and `ln2a-ln2b` cross,
/// clamped to lie on segment `ln1a-ln1b` (`t` is pinned to `[0, 1]` against
/// that segment). Writes the result into `ip` and returns `false` (leaving
/// `ip` untouched) when the two lines are parallel.
#[inline]
pub fn get_segment_intersect_pt(
    ln1a: Point64,
    ln1b: Point64,
    ln2a: Point64,
    ln2b: Point64,
    ip: &mut Point64,
) -> bool {
    let dy1 = (ln1b.y - ln1a.y) as f64;
    let dx1 = (ln1b.x - ln1a.x) as f64;
    let dy2 = (ln2b.y - ln2a.y) as f64;
    let dx2 = (ln2b.x - ln2a.x) as f64;

    let det = dy1 * dx2 - dy2 * dx1;
    if det == 0.0 {
        return false;
    }

    let mut t = ((ln1a.x - ln2a.x) as f64 * dy2 - (ln1a.y - ln2a.y) as f64 * dx2) / det;
    if t <= 0.0 {
        t = 0.0;
    } else if t >= 1.0 {
        t = 1.0;
    }

    ip.x = ln1a.x + round_half_even_i64(t * dx1);
    ip.y = ln1a.y + round_half_even_i64(t * dy1);
    true
}

/// Closest point to `pt` lying on segment `seg_a-seg_b` (clamped to the
/// segment, not the infinite line).
#[inline]
pub fn get_closest_point_on_segment(pt: Point64, seg_a: Point64, seg_b: Point64) -> Point64 {
    if seg_a.x == seg_b.x && seg_a.y == seg_b.y {
        return seg_a;
    }
    let dx = (seg_b.x - seg_a.x) as f64;
    let dy = (seg_b.y - seg_a.y) as f64;
    let mut t = ((pt.x - seg_a.x) as f64 * dx + (pt.y - seg_a.y) as f64 * dy) / (dx * dx + dy * dy);
    if t <= 0.0 {
        t = 0.0;
    } else if t >= 1.0 {
        t = 1.0;
    }
    Point64::new(
        seg_a.x + round_half_even_i64(t * dx),
        seg_a.y + round_half_even_i64(t * dy),
    )
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_sqr<T>(pt1: Point<T>, pt2: Point<T>) -> f64
where
    T: Copy + ToF64,
{
    let dx = pt1.x.to_f64() - pt2.x.to_f64();
    let dy = pt1.y.to_f64() - pt2.y.to_f64();
    dx * dx + dy * dy
}

/// Squared perpendicular distance from `pt` to the infinite line through
/// `line_pt1`/`line_pt2`.
#[inline]
pub fn perpendic_dist_from_line_sqrd<T>(pt: Point<T>, line_pt1: Point<T>, line_pt2: Point<T>) -> f64
where
    T: Copy + ToF64,
{
    let x = pt.x.to_f64();
    let y = pt.y.to_f64();
    let x1 = line_pt1.x.to_f64();
    let y1 = line_pt1.y.to_f64();
    let x2 = line_pt2.x.to_f64();
    let y2 = line_pt2.y.to_f64();

    let a = y1 - y2;
    let b = x2 - x1;
    let c = a * x1 + b * y1;
    let denom = a * a + b * b;
    if denom == 0.0 {
        return distance_sqr(pt, line_pt1);
    }
    let num = a * x + b * y - c;
    (num * num) / denom
}

/// Result of classifying a point against a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInPolygonResult {
    IsOn,
    IsInside,
    IsOutside,
}

/// Classify `pt` against the closed polygon `path` via ray casting.
///
/// Mirrors the OutPt-ring walk used internally during owner validation
/// (see `point_in_op_polygon`), just over a flat `Path64` instead of a
/// linked `OutPt` ring.
pub fn point_in_polygon(pt: Point64, path: &Path64) -> PointInPolygonResult {
    let len = path.len();
    if len < 3 {
        return PointInPolygonResult::IsOutside;
    }

    let mut start = 0usize;
    while start < len && path[start].y == pt.y {
        start += 1;
    }
    if start == len {
        return PointInPolygonResult::IsOutside;
    }

    let mut is_above = path[start].y < pt.y;
    let starting_above = is_above;
    let mut val = 0i32;
    let mut i = (start + 1) % len;
    let mut prev = start;

    loop {
        if i == start {
            break;
        }
        if is_above {
            while i != start && path[i].y < pt.y {
                prev = i;
                i = (i + 1) % len;
            }
        } else {
            while i != start && path[i].y > pt.y {
                prev = i;
                i = (i + 1) % len;
            }
        }
        if i == start {
            break;
        }

        if path[i].y == pt.y {
            let pprev = if i == 0 { len - 1 } else { i - 1 };
            if path[i].x == pt.x
                || (path[i].y == path[pprev].y && (pt.x < path[pprev].x) != (pt.x < path[i].x))
            {
                return PointInPolygonResult::IsOn;
            }
            prev = i;
            i = (i + 1) % len;
            continue;
        }

        let pprev = if i == 0 { len - 1 } else { i - 1 };
        if pt.x < path[i].x && pt.x < path[pprev].x {
            // segment entirely to the right of pt; no crossing
        } else if pt.x > path[pprev].x && pt.x > path[i].x {
            val = 1 - val;
        } else {
            let sign = cross_product_sign(path[pprev], path[i], pt);
            if sign == 0 {
                return PointInPolygonResult::IsOn;
            }
            if (sign < 0) == is_above {
                val = 1 - val;
            }
        }
        is_above = !is_above;
        prev = i;
        i = (i + 1) % len;
    }

    if is_above != starting_above {
        let pprev = if prev == 0 { len - 1 } else { prev - 1 };
        let sign = cross_product_sign(path[pprev], path[prev], pt);
        if sign == 0 {
            return PointInPolygonResult::IsOn;
        }
        if (sign < 0) == is_above {
            val = 1 - val;
        }
    }

    if val == 0 {
        PointInPolygonResult::IsOutside
    } else {
        PointInPolygonResult::IsInside
    }
}

/// Construct a value of `T` from an `f64`, rounding to the nearest integer
/// for integer domains. Counterpart to [`ToF64`] for the scaling façade.
pub trait FromF64 {
    fn from_f64(v: f64) -> Self;
}

impl FromF64 for i64 {
    fn from_f64(v: f64) -> Self {
        v.round() as i64
    }
}

impl FromF64 for i32 {
    fn from_f64(v: f64) -> Self {
        v.round() as i32
    }
}

impl FromF64 for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl FromF64 for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

/// Scale a path from domain `T` into domain `T2` by independent x/y factors.
pub fn scale_path<T, T2>(path: &Path<T>, scale_x: f64, scale_y: f64, error_code: &mut i32) -> Path<T2>
where
    T: Copy + ToF64,
    T2: FromF64,
{
    if scale_x == 0.0 || scale_y == 0.0 {
        *error_code |= errors::SCALE_ERROR_I;
        return Path::<T2>::new();
    }
    path.iter()
        .map(|p| {
            Point::<T2>::new_z(
                T2::from_f64(p.x.to_f64() * scale_x),
                T2::from_f64(p.y.to_f64() * scale_y),
                T2::from_f64(p.z.to_f64()),
            )
        })
        .collect()
}

/// Scale every path in `paths` (see [`scale_path`]).
pub fn scale_paths<T, T2>(
    paths: &Paths<T>,
    scale_x: f64,
    scale_y: f64,
    error_code: &mut i32,
) -> Paths<T2>
where
    T: Copy + ToF64,
    T2: FromF64,
{
    paths
        .iter()
        .map(|p| scale_path(p, scale_x, scale_y, error_code))
        .collect()
}

/// Scale a rectangle from domain `T` into domain `T2` by a uniform factor.
pub fn scale_rect<T, T2>(rect: &Rect<T>, scale: f64) -> Rect<T2>
where
    T: Copy + ToF64,
    T2: FromF64,
{
    Rect::new(
        T2::from_f64(rect.left.to_f64() * scale),
        T2::from_f64(rect.top.to_f64() * scale),
        T2::from_f64(rect.right.to_f64() * scale),
        T2::from_f64(rect.bottom.to_f64() * scale),
    )
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;

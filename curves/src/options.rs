/// Default maximum deviation of a flattened curve from the true curve
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.5;

/// Default tolerance used when estimating arc lengths
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 0.01;

/// Default number of coarse samples taken before refining a nearest-point search
pub const DEFAULT_NEAREST_POINT_SAMPLES: usize = 50;

/// Default distance (in grid units) within which a point is considered to hit a stroke
pub const DEFAULT_HIT_TOLERANCE: f64 = 3.0;

/// Default maximum error for curve fitting
pub const DEFAULT_FIT_ERROR: f64 = 0.5;

/// Default number of samples taken along a curve when generating its offset
pub const DEFAULT_OFFSET_SEGMENTS: usize = 16;

///
/// Tolerances and sample counts used by the path operations that approximate their results
///
/// The defaults suit drawings measured in character cells. They can be stored alongside a document if an
/// application wants to adjust them.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryOptions {
    /// Maximum distance between a curve and its flattened form
    pub flatten_tolerance: f64,

    /// Tolerance used by the recursive arc length estimate
    pub length_tolerance: f64,

    /// Number of coarse samples used to seed nearest-point searches
    pub nearest_point_samples: usize,

    /// Distance from a stroke that still counts as a hit
    pub hit_tolerance: f64,

    /// Number of samples taken along a curved segment when hit testing
    pub curve_hit_samples: usize,

    /// Number of samples taken along a straight segment when hit testing
    pub line_hit_samples: usize,

    /// Maximum error when fitting curves to points
    pub fit_error: f64,

    /// Number of samples taken along a curve when generating its offset
    pub offset_segments: usize,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        GeometryOptions {
            flatten_tolerance:      DEFAULT_FLATTEN_TOLERANCE,
            length_tolerance:       DEFAULT_LENGTH_TOLERANCE,
            nearest_point_samples:  DEFAULT_NEAREST_POINT_SAMPLES,
            hit_tolerance:          DEFAULT_HIT_TOLERANCE,
            curve_hit_samples:      20,
            line_hit_samples:       2,
            fit_error:              DEFAULT_FIT_ERROR,
            offset_segments:        DEFAULT_OFFSET_SEGMENTS,
        }
    }
}

impl GeometryOptions {
    ///
    /// Sets the tolerance used when flattening curves
    ///
    pub fn with_flatten_tolerance(mut self, tolerance: f64) -> Self {
        self.flatten_tolerance = tolerance;
        self
    }

    ///
    /// Sets the tolerance used when measuring curves
    ///
    pub fn with_length_tolerance(mut self, tolerance: f64) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    ///
    /// Sets the number of coarse samples used when searching for the nearest point on a curve
    ///
    pub fn with_nearest_point_samples(mut self, samples: usize) -> Self {
        self.nearest_point_samples = samples;
        self
    }

    ///
    /// Sets how far from a stroke a point can be and still be considered a hit
    ///
    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    ///
    /// Sets the number of samples used when hit testing curved and straight segments
    ///
    pub fn with_hit_samples(mut self, curve_samples: usize, line_samples: usize) -> Self {
        self.curve_hit_samples  = curve_samples;
        self.line_hit_samples   = line_samples;
        self
    }

    ///
    /// Sets the maximum error allowed when fitting curves
    ///
    pub fn with_fit_error(mut self, error: f64) -> Self {
        self.fit_error = error;
        self
    }

    ///
    /// Sets the number of samples taken along a curve when generating its offset
    ///
    pub fn with_offset_segments(mut self, segments: usize) -> Self {
        self.offset_segments = segments;
        self
    }
}

//! Bar geometry and the rounded-box transform.
//!
//! Bars are laid out in data coordinates (x = dice sum, y = percent). Each bar
//! box is turned into a rounded rectangle by padding it and replacing its four
//! corners with quadratic Bezier curves whose control point is the original
//! corner. A mutation aspect stretches the vertical pad and radius so corners
//! stay visually round when the y axis spans many more units than the x axis.

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Box spanning the two corners, normalised so width and height are >= 0.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x_min: x0.min(x1),
            y_min: y0.min(y1),
            width: (x1 - x0).abs(),
            height: (y1 - y0).abs(),
        }
    }

    /// Box of a bar centred on `center` rising from zero to `value`.
    pub fn bar(center: f64, width: f64, value: f64) -> Self {
        Self::from_corners(center - width / 2.0, 0.0, center + width / 2.0, value)
    }

    pub fn x_max(&self) -> f64 {
        self.x_min + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y_min + self.height
    }

    pub fn center(&self) -> [f64; 2] {
        [self.x_min + self.width / 2.0, self.y_min + self.height / 2.0]
    }

    pub fn contains(&self, point: [f64; 2], tolerance: f64) -> bool {
        point[0] >= self.x_min - tolerance
            && point[0] <= self.x_max() + tolerance
            && point[1] >= self.y_min - tolerance
            && point[1] <= self.y_max() + tolerance
    }
}

/// Parameters of the "round" box style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundBoxStyle {
    /// Padding added around the box, in units of `mutation_scale`; negative counts as 0
    pub pad: f64,
    /// Corner radius in units of `mutation_scale`; zero or `None` reuses `pad`
    pub rounding_size: Option<f64>,
    /// Multiplier for pad and radius; negative counts as 0
    pub mutation_scale: f64,
    /// Vertical stretch applied to pad and radius; non-positive or NaN counts as 1
    pub mutation_aspect: f64,
}

impl Default for RoundBoxStyle {
    fn default() -> Self {
        Self {
            pad: 0.1,
            rounding_size: Some(0.0),
            mutation_scale: 1.0,
            mutation_aspect: 2.0,
        }
    }
}

impl RoundBoxStyle {
    /// Copy with every parameter moved into its valid range, see the field docs.
    pub fn clamped(&self) -> Self {
        Self {
            pad: self.pad.max(0.0),
            rounding_size: self.rounding_size.filter(|size| *size > 0.0),
            mutation_scale: self.mutation_scale.max(0.0),
            mutation_aspect: if self.mutation_aspect > 0.0 {
                self.mutation_aspect
            } else {
                1.0
            },
        }
    }

    /// Rounded rectangle with the same bounding box as `bbox`, grown by the pad.
    pub fn apply(&self, bbox: &BoundingBox) -> RoundedRect {
        let style = self.clamped();
        let aspect = style.mutation_aspect;

        let pad = style.mutation_scale * style.pad;
        let radius = match style.rounding_size {
            Some(size) => style.mutation_scale * size,
            None => pad,
        };

        // Work in a space where y is squashed by the aspect, then stretch back.
        let width = bbox.width + 2.0 * pad;
        let height = bbox.height / aspect + 2.0 * pad;
        let x0 = bbox.x_min - pad;
        let y0 = bbox.y_min / aspect - pad;

        let radius = radius.min(width / 2.0).min(height / 2.0);

        RoundedRect {
            outer: BoundingBox {
                x_min: x0,
                y_min: y0 * aspect,
                width,
                height: height * aspect,
            },
            radius_x: radius,
            radius_y: radius * aspect,
        }
    }
}

/// Rectangle with quadratic-Bezier corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub outer: BoundingBox,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl RoundedRect {
    /// Closed counter-clockwise outline, `segments_per_corner + 1` points per corner.
    ///
    /// The polygon is convex, so it can be filled directly.
    pub fn outline(&self, segments_per_corner: usize) -> Vec<[f64; 2]> {
        let n = segments_per_corner.max(1);
        let (x0, y0) = (self.outer.x_min, self.outer.y_min);
        let (x1, y1) = (self.outer.x_max(), self.outer.y_max());
        let (rx, ry) = (self.radius_x, self.radius_y);

        // (start, control, end) for lower-right, upper-right, upper-left, lower-left
        let corners = [
            ([x1 - rx, y0], [x1, y0], [x1, y0 + ry]),
            ([x1, y1 - ry], [x1, y1], [x1 - rx, y1]),
            ([x0 + rx, y1], [x0, y1], [x0, y1 - ry]),
            ([x0, y0 + ry], [x0, y0], [x0 + rx, y0]),
        ];

        let mut points = Vec::with_capacity(4 * (n + 1));
        for (start, control, end) in corners {
            for i in 0..=n {
                let t = i as f64 / n as f64;
                points.push(quadratic_bezier(start, control, end, t));
            }
        }
        points
    }
}

fn quadratic_bezier(p0: [f64; 2], c: [f64; 2], p2: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    [
        u * u * p0[0] + 2.0 * u * t * c[0] + t * t * p2[0],
        u * u * p0[1] + 2.0 * u * t * c[1] + t * t * p2[1],
    ]
}

/// Rounded shape for every bar box, in the same order as the input.
pub fn round_bars(boxes: &[BoundingBox], style: &RoundBoxStyle) -> Vec<RoundedRect> {
    boxes.iter().map(|bbox| style.apply(bbox)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn bar_box_is_centred() {
        let bbox = BoundingBox::bar(7.0, 0.6, 16.67);
        assert!(close(bbox.x_min, 6.7));
        assert!(close(bbox.x_max(), 7.3));
        assert_eq!(bbox.y_min, 0.0);
        assert_eq!(bbox.height, 16.67);
    }

    #[test]
    fn negative_heights_are_normalised() {
        let bbox = BoundingBox::bar(3.0, 0.6, -4.0);
        assert_eq!(bbox.y_min, -4.0);
        assert_eq!(bbox.height, 4.0);
    }

    #[test]
    fn default_style_pads_and_stretches() {
        let bbox = BoundingBox::bar(2.0, 0.6, 2.78);
        let rounded = RoundBoxStyle::default().apply(&bbox);

        assert!(close(rounded.outer.x_min, 1.6));
        assert!(close(rounded.outer.x_max(), 2.4));
        assert!(close(rounded.outer.y_min, -0.2));
        assert!(close(rounded.outer.y_max(), 2.98));
        assert!(close(rounded.radius_x, 0.1));
        assert!(close(rounded.radius_y, 0.2));
    }

    #[test]
    fn explicit_rounding_size_is_used() {
        let style = RoundBoxStyle {
            pad: 0.1,
            rounding_size: Some(0.25),
            mutation_scale: 1.0,
            mutation_aspect: 1.0,
        };
        let rounded = style.apply(&BoundingBox::bar(5.0, 1.0, 10.0));
        assert!(close(rounded.radius_x, 0.25));
        assert!(close(rounded.radius_y, 0.25));
    }

    #[test]
    fn radius_never_exceeds_half_side() {
        let style = RoundBoxStyle {
            pad: 0.0,
            rounding_size: Some(5.0),
            mutation_scale: 1.0,
            mutation_aspect: 1.0,
        };
        let rounded = style.apply(&BoundingBox::bar(0.0, 0.6, 1.0));
        assert!(close(rounded.radius_x, 0.3));
        assert!(close(rounded.radius_y, 0.3));
    }

    #[test]
    fn out_of_range_parameters_are_clamped() {
        let style = RoundBoxStyle {
            pad: 0.1,
            rounding_size: Some(-1.0),
            mutation_scale: -3.0,
            mutation_aspect: -2.0,
        };
        let clamped = style.clamped();
        assert_eq!(clamped.mutation_scale, 0.0);
        assert_eq!(clamped.mutation_aspect, 1.0);
        assert_eq!(clamped.rounding_size, None);

        // zero scale means no pad and square corners
        let bbox = BoundingBox::bar(4.0, 0.6, 8.33);
        let rounded = style.apply(&bbox);
        assert_eq!(rounded.outer, bbox);
        assert_eq!(rounded.radius_x, 0.0);
        assert_eq!(rounded.radius_y, 0.0);

        let nan_aspect = RoundBoxStyle {
            mutation_aspect: f64::NAN,
            ..RoundBoxStyle::default()
        };
        assert_eq!(nan_aspect.clamped().mutation_aspect, 1.0);
    }

    #[test]
    fn outline_has_expected_shape() {
        let rounded = RoundBoxStyle::default().apply(&BoundingBox::bar(7.0, 0.6, 16.67));
        let outline = rounded.outline(6);

        assert_eq!(outline.len(), 4 * 7);
        assert!(outline.iter().all(|&p| rounded.outer.contains(p, EPS)));

        // first corner starts on the bottom edge and ends on the right edge
        let first = outline[0];
        let last_of_first = outline[6];
        assert!(close(first[1], rounded.outer.y_min));
        assert!(close(last_of_first[0], rounded.outer.x_max()));
    }

    #[test]
    fn outline_is_counter_clockwise() {
        let rounded = RoundBoxStyle::default().apply(&BoundingBox::bar(4.0, 0.6, 8.33));
        let outline = rounded.outline(4);
        let n = outline.len();
        let doubled_area: f64 = (0..n)
            .map(|i| {
                let a = outline[i];
                let b = outline[(i + 1) % n];
                a[0] * b[1] - b[0] * a[1]
            })
            .sum();
        assert!(doubled_area > 0.0);
    }

    #[test]
    fn round_bars_preserves_order() {
        let boxes: Vec<BoundingBox> = (2..=12)
            .map(|s| BoundingBox::bar(s as f64, 0.6, s as f64))
            .collect();
        let rounded = round_bars(&boxes, &RoundBoxStyle::default());

        assert_eq!(rounded.len(), boxes.len());
        for (bbox, shape) in boxes.iter().zip(&rounded) {
            assert!(close(shape.outer.center()[0], bbox.center()[0]));
        }
    }
}

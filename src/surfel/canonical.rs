use crate::cell::FaceType;

use super::Surfel;

/// Returns `true` if `candidate` and `existing` describe the same physical
/// face.
///
/// Two cells sharing a face list its boundary in opposite winding, so the
/// candidate is walked forward from its smallest corner while the existing
/// record is walked backward from its own. Mid-edge nodes follow the same
/// walk shifted back by one, since the node of edge `i` sits after corner
/// `i`; a center node is rotation invariant and compared directly.
#[must_use]
pub fn faces_match(candidate: &Surfel, existing: &Surfel) -> bool {
    if candidate.face_type != existing.face_type || candidate.num_points != existing.num_points {
        return false;
    }
    let c = candidate.points();
    let e = existing.points();

    // Only edges 0-1 and 2-3 are curved, so just two encodings exist.
    if candidate.face_type == FaceType::QuadraticLinearQuad {
        return quadratic_linear_quad_match(c, e);
    }

    let n = candidate.corner_count();
    let (sc, se) = (candidate.smallest_idx, existing.smallest_idx);
    let corners = (0..n).all(|i| e[(se + n - i) % n] == c[(sc + i) % n]);
    if !corners {
        return false;
    }

    match candidate.face_type {
        FaceType::QuadraticTriangle | FaceType::QuadraticQuad => mid_edges_match(c, e, sc, se, n),
        FaceType::BiquadraticTriangle | FaceType::BiquadraticQuad => {
            mid_edges_match(c, e, sc, se, n) && c[2 * n] == e[2 * n]
        }
        FaceType::Triangle | FaceType::Quad | FaceType::Polygon | FaceType::QuadraticLinearQuad => {
            true
        }
    }
}

fn mid_edges_match(c: &[usize], e: &[usize], sc: usize, se: usize, n: usize) -> bool {
    (0..n).all(|i| e[n + (se + 2 * n - i - 1) % n] == c[n + (sc + i) % n])
}

fn quadratic_linear_quad_match(c: &[usize], e: &[usize]) -> bool {
    if c[0] == e[1] {
        c[1] == e[0] && c[2] == e[3] && c[3] == e[2] && c[4] == e[4] && c[5] == e[5]
    } else if c[0] == e[3] {
        c[1] == e[2] && c[2] == e[1] && c[3] == e[0] && c[4] == e[5] && c[5] == e[4]
    } else {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn surfel(face_type: FaceType, points: &[usize]) -> Surfel {
        Surfel::new(0, face_type, points).unwrap()
    }

    /// Reverses the corner cycle and re-threads the mid-edge and center
    /// nodes so they stay attached to the same edges.
    fn reversed(points: &[usize], corners: usize, rotate: usize) -> Vec<usize> {
        let n = corners;
        let rev_corners: Vec<usize> = (0..n).map(|i| points[(n - i) % n]).collect();
        let mut out: Vec<usize> = (0..n).map(|i| rev_corners[(i + rotate) % n]).collect();
        if points.len() > n {
            // Reversed edge i joins old corners (n - i) and (n - i - 1).
            let rev_mids: Vec<usize> = (0..n).map(|i| points[n + (2 * n - i - 1) % n]).collect();
            out.extend((0..n).map(|i| rev_mids[(i + rotate) % n]));
        }
        out.extend_from_slice(&points[(2 * n).min(points.len())..]);
        out
    }

    #[test]
    fn triangle_in_every_opposite_rotation() {
        let a = surfel(FaceType::Triangle, &[5, 2, 9]);
        for r in 0..3 {
            let b = surfel(FaceType::Triangle, &reversed(&[5, 2, 9], 3, r));
            assert!(faces_match(&b, &a), "rotation {r}");
        }
    }

    #[test]
    fn same_winding_is_not_a_match() {
        let a = surfel(FaceType::Quad, &[1, 2, 3, 4]);
        let b = surfel(FaceType::Quad, &[2, 3, 4, 1]);
        assert!(!faces_match(&b, &a));
    }

    #[test]
    fn quad_with_shared_corners_but_different_order() {
        let a = surfel(FaceType::Quad, &[1, 2, 3, 4]);
        let b = surfel(FaceType::Quad, &[1, 3, 2, 4]);
        assert!(!faces_match(&b, &a));
    }

    #[test]
    fn polygon_reversed() {
        let pts = [11, 4, 8, 15, 6, 20];
        let a = surfel(FaceType::Polygon, &pts);
        for r in 0..6 {
            let b = surfel(FaceType::Polygon, &reversed(&pts, 6, r));
            assert!(faces_match(&b, &a), "rotation {r}");
        }
        let shorter = surfel(FaceType::Polygon, &[11, 20, 6, 15, 8]);
        assert!(!faces_match(&shorter, &a));
    }

    #[test]
    fn quadratic_triangle_mid_nodes_follow_edges() {
        let pts = [3, 1, 2, 30, 12, 23];
        let a = surfel(FaceType::QuadraticTriangle, &pts);
        for r in 0..3 {
            let b = surfel(FaceType::QuadraticTriangle, &reversed(&pts, 3, r));
            assert!(faces_match(&b, &a), "rotation {r}");
        }
        // Same corners, mid nodes swapped between edges.
        let mut wrong = reversed(&pts, 3, 0);
        wrong.swap(3, 4);
        assert!(!faces_match(&surfel(FaceType::QuadraticTriangle, &wrong), &a));
    }

    #[test]
    fn quadratic_quad_mid_nodes_follow_edges() {
        let pts = [0, 1, 2, 3, 10, 11, 12, 13];
        let a = surfel(FaceType::QuadraticQuad, &pts);
        for r in 0..4 {
            let b = surfel(FaceType::QuadraticQuad, &reversed(&pts, 4, r));
            assert!(faces_match(&b, &a), "rotation {r}");
        }
    }

    #[test]
    fn biquadratic_center_must_agree() {
        let pts = [7, 3, 9, 5, 73, 39, 95, 57, 100];
        let a = surfel(FaceType::BiquadraticQuad, &pts);
        let b = reversed(&pts, 4, 1);
        assert!(faces_match(&surfel(FaceType::BiquadraticQuad, &b), &a));

        let mut off_center = b;
        off_center[8] = 101;
        assert!(!faces_match(&surfel(FaceType::BiquadraticQuad, &off_center), &a));
    }

    #[test]
    fn biquadratic_triangle_reversed() {
        let pts = [4, 8, 6, 48, 86, 64, 99];
        let a = surfel(FaceType::BiquadraticTriangle, &pts);
        for r in 0..3 {
            let b = surfel(FaceType::BiquadraticTriangle, &reversed(&pts, 3, r));
            assert!(faces_match(&b, &a), "rotation {r}");
        }
    }

    #[test]
    fn quadratic_linear_quad_two_encodings() {
        // Curved edges a-b (node 40) and c-d (node 50).
        let a = surfel(FaceType::QuadraticLinearQuad, &[1, 2, 3, 4, 40, 50]);
        let flipped = surfel(FaceType::QuadraticLinearQuad, &[2, 1, 4, 3, 40, 50]);
        let turned = surfel(FaceType::QuadraticLinearQuad, &[4, 3, 2, 1, 50, 40]);
        assert!(faces_match(&flipped, &a));
        assert!(faces_match(&turned, &a));
    }

    #[test]
    fn quadratic_linear_quad_rejects_generic_rotation() {
        let a = surfel(FaceType::QuadraticLinearQuad, &[1, 2, 3, 4, 40, 50]);
        // A plain reversed rotation puts the curved edges on edges 1 and 3.
        let rotated = surfel(FaceType::QuadraticLinearQuad, &[1, 4, 3, 2, 50, 40]);
        assert!(!faces_match(&rotated, &a));
        let bad_mid = surfel(FaceType::QuadraticLinearQuad, &[2, 1, 4, 3, 50, 40]);
        assert!(!faces_match(&bad_mid, &a));
    }

    #[test]
    fn different_types_never_match() {
        let a = surfel(FaceType::Triangle, &[0, 1, 2]);
        let b = surfel(FaceType::Polygon, &[0, 2, 1]);
        assert!(!faces_match(&b, &a));
    }
}

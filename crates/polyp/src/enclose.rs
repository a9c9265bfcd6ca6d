//! Smallest enclosing circle of a set of circles.
//!
//! Matoušek-Sharir-Welzl basis walk over the input in the order given.
//! Upstream d3 randomizes the scan order; keeping the input order makes the
//! enclosure (and therefore the whole packing) reproducible run to run.

use crate::pack::Circle;

/// Returns the smallest circle that encloses every circle in `circles`,
/// or `None` for an empty input.
pub fn enclose(circles: &[Circle]) -> Option<Circle> {
    if circles.is_empty() {
        return None;
    }

    let mut basis: Vec<Circle> = Vec::new();
    let mut e: Option<Circle> = None;
    let mut i = 0;
    while i < circles.len() {
        let p = circles[i];
        match e {
            Some(enc) if encloses_weak(&enc, &p) => i += 1,
            _ => {
                basis = extend_basis(&basis, p);
                e = Some(enclose_basis(&basis));
                i = 0;
            }
        }
    }
    e
}

fn extend_basis(basis: &[Circle], p: Circle) -> Vec<Circle> {
    if encloses_weak_all(&p, basis) {
        return vec![p];
    }

    // If we get here then the basis has at least one element.
    for a in basis {
        if encloses_not(&p, a) && encloses_weak_all(&enclose_basis_2(a, &p), basis) {
            return vec![*a, p];
        }
    }

    // If we get here then the basis has at least two elements.
    for i in 0..basis.len() - 1 {
        for j in i + 1..basis.len() {
            let (a, b) = (&basis[i], &basis[j]);
            if encloses_not(&enclose_basis_2(a, b), &p)
                && encloses_not(&enclose_basis_2(a, &p), b)
                && encloses_not(&enclose_basis_2(b, &p), a)
                && encloses_weak_all(&enclose_basis_3(a, b, &p), basis)
            {
                return vec![*a, *b, p];
            }
        }
    }

    unreachable!("enclosure basis cannot be extended");
}

fn encloses_not(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr < 0.0 || dr * dr < dx * dx + dy * dy
}

fn encloses_weak(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r + 1e-6;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

fn encloses_weak_all(a: &Circle, basis: &[Circle]) -> bool {
    basis.iter().all(|b| encloses_weak(a, b))
}

fn enclose_basis(basis: &[Circle]) -> Circle {
    match basis {
        [a] => *a,
        [a, b] => enclose_basis_2(a, b),
        [a, b, c] => enclose_basis_3(a, b, c),
        _ => unreachable!("enclosure basis holds at most three circles"),
    }
}

fn enclose_basis_2(a: &Circle, b: &Circle) -> Circle {
    let x21 = b.x - a.x;
    let y21 = b.y - a.y;
    let r21 = b.r - a.r;
    let l = (x21 * x21 + y21 * y21).sqrt();
    Circle {
        x: (a.x + b.x + x21 / l * r21) / 2.0,
        y: (a.y + b.y + y21 / l * r21) / 2.0,
        r: (l + a.r + b.r) / 2.0,
    }
}

fn enclose_basis_3(a: &Circle, b: &Circle, c: &Circle) -> Circle {
    let (x1, y1, r1) = (a.x, a.y, a.r);
    let (x2, y2, r2) = (b.x, b.y, b.r);
    let (x3, y3, r3) = (c.x, c.y, c.r);
    let a2 = x1 - x2;
    let a3 = x1 - x3;
    let b2 = y1 - y2;
    let b3 = y1 - y3;
    let c2 = r2 - r1;
    let c3 = r3 - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = -if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).max(0.0).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    };
    Circle {
        x: x1 + xa + xb * r,
        y: y1 + ya + yb * r,
        r,
    }
}

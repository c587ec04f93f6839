//! Package version ordering
//!
//! Same ordering as libalpm's `alpm_pkg_vercmp`: `[epoch:]version[-release]`,
//! where the release only takes part when both sides carry one, and each part
//! is compared segment by segment with rpmvercmp rules.

use std::cmp::Ordering;

/// Compare two full package versions
pub fn vercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (epoch_a, ver_a, rel_a) = parse_evr(a);
    let (epoch_b, ver_b, rel_b) = parse_evr(b);

    rpmvercmp(epoch_a, epoch_b)
        .then_with(|| rpmvercmp(ver_a, ver_b))
        .then_with(|| match (rel_a, rel_b) {
            (Some(rel_a), Some(rel_b)) => rpmvercmp(rel_a, rel_b),
            _ => Ordering::Equal,
        })
}

/// Split `[epoch:]version[-release]`; a missing or empty epoch is `0`
fn parse_evr(evr: &str) -> (&str, &str, Option<&str>) {
    let digits = evr.bytes().take_while(u8::is_ascii_digit).count();
    let (epoch, rest) = if evr.as_bytes().get(digits) == Some(&b':') {
        let epoch = &evr[..digits];
        (if epoch.is_empty() { "0" } else { epoch }, &evr[digits + 1..])
    } else {
        ("0", evr)
    };

    match rest.rfind('-') {
        Some(idx) => (epoch, &rest[..idx], Some(&rest[idx + 1..])),
        None => (epoch, rest, None),
    }
}

/// Segment-wise comparison of a single version part
fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let one = a.as_bytes();
    let two = b.as_bytes();
    let (mut i, mut j) = (0, 0);
    let (mut seg_end_a, mut seg_end_b) = (0, 0);

    while i < one.len() && j < two.len() {
        while i < one.len() && !one[i].is_ascii_alphanumeric() {
            i += 1;
        }
        while j < two.len() && !two[j].is_ascii_alphanumeric() {
            j += 1;
        }
        if i >= one.len() || j >= two.len() {
            break;
        }

        // Differently sized separators decide on their own
        let sep_a = i - seg_end_a;
        let sep_b = j - seg_end_b;
        if sep_a != sep_b {
            return sep_a.cmp(&sep_b);
        }

        seg_end_a = i;
        seg_end_b = j;
        let numeric = one[i].is_ascii_digit();
        let same_class = |c: &u8| {
            if numeric {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphabetic()
            }
        };
        while seg_end_a < one.len() && same_class(&one[seg_end_a]) {
            seg_end_a += 1;
        }
        while seg_end_b < two.len() && same_class(&two[seg_end_b]) {
            seg_end_b += 1;
        }

        // A numeric segment beats an alpha one
        if j == seg_end_b {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let mut seg_a = &one[i..seg_end_a];
        let mut seg_b = &two[j..seg_end_b];
        if numeric {
            seg_a = trim_zeros(seg_a);
            seg_b = trim_zeros(seg_b);
            match seg_a.len().cmp(&seg_b.len()) {
                Ordering::Equal => {}
                longer => return longer,
            }
        }
        match seg_a.cmp(seg_b) {
            Ordering::Equal => {}
            other => return other,
        }

        i = seg_end_a;
        j = seg_end_b;
    }

    let a_done = i >= one.len();
    let b_done = j >= two.len();
    if a_done && b_done {
        return Ordering::Equal;
    }

    // A trailing alpha part never beats an empty one
    let b_alpha = two.get(j).is_some_and(u8::is_ascii_alphabetic);
    let a_alpha = one.get(i).is_some_and(u8::is_ascii_alphabetic);
    if (a_done && !b_alpha) || a_alpha {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

fn trim_zeros(segment: &[u8]) -> &[u8] {
    let zeros = segment.iter().take_while(|&&c| c == b'0').count();
    &segment[zeros..]
}

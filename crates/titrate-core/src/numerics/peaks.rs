#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub height: f64,
    pub prominence: f64,
}

/// Detects local maxima whose prominence reaches `min_prominence`.
///
/// A candidate is a point strictly greater than both neighbors, so the
/// endpoints and plateau points never qualify. Prominence is the peak
/// height above the lower of the two base minima, where each base is the
/// minimum between the peak and the nearest strictly higher terrain on
/// that side (or the end of the curve). Peaks are returned in ascending
/// index order, which makes the first entry the deterministic
/// lowest-index choice.
pub fn find_prominent_peaks(values: &[f64], min_prominence: f64) -> Vec<Peak> {
    if values.len() < 3 {
        return Vec::new();
    }

    let mut peaks = Vec::new();
    for index in 1..values.len() - 1 {
        let height = values[index];
        if !(height > values[index - 1] && height > values[index + 1]) {
            continue;
        }

        let prominence = height - base_level(values, index, height);
        if prominence >= min_prominence {
            peaks.push(Peak {
                index,
                height,
                prominence,
            });
        }
    }
    peaks
}

fn base_level(values: &[f64], peak_index: usize, height: f64) -> f64 {
    let mut left_min = height;
    for value in values[..peak_index].iter().rev().copied() {
        if value > height {
            break;
        }
        left_min = left_min.min(value);
    }

    let mut right_min = height;
    for value in values[peak_index + 1..].iter().copied() {
        if value > height {
            break;
        }
        right_min = right_min.min(value);
    }

    left_min.max(right_min)
}

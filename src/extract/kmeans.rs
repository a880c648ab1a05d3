//! Fixed-iteration k-means over RGB colours.

use crate::types::Colour;

/// Cluster `colours` into at most `k` centroids.
///
/// If there are no more than `k` colours they are returned unchanged.
/// Otherwise the first `k` colours seed the centroids and exactly
/// `iterations` rounds run, with no convergence check. Each colour joins
/// its nearest centroid by Euclidean RGB distance, the lower index winning
/// ties. Centroids move to the rounded mean of their members; a centroid
/// with no members takes the previous round's centroid 0.
pub fn kmeans(colours: &[Colour], k: usize, iterations: usize) -> Vec<Colour> {
    if colours.len() <= k {
        return colours.to_vec();
    }
    if k == 0 {
        return Vec::new();
    }

    let mut centroids = colours[..k].to_vec();

    for _ in 0..iterations {
        let mut clusters: Vec<Vec<Colour>> = vec![Vec::new(); k];
        for &colour in colours {
            clusters[nearest(colour, &centroids)].push(colour);
        }

        centroids = clusters
            .iter()
            .map(|members| mean(members).unwrap_or(centroids[0]))
            .collect();
    }

    centroids
}

fn nearest(colour: Colour, centroids: &[Colour]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = colour.distance(*centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn mean(members: &[Colour]) -> Option<Colour> {
    if members.is_empty() {
        return None;
    }
    let n = members.len() as f64;
    let channel = |f: fn(&Colour) -> u8| {
        let sum: f64 = members.iter().map(|c| f(c) as f64).sum();
        (sum / n).round() as u8
    };
    Some(Colour::new(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b)))
}

/// Point-to-facility mapping, one entry per point.
///
/// `None` marks a point that has not been assigned yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    labels: Vec<Option<usize>>,
}

impl Assignment {
    /// An assignment of `n` points where nothing is mapped yet
    pub fn unassigned(n: usize) -> Self {
        Self {
            labels: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Facility id of point `index`, `None` if unassigned or out of range
    pub fn get(&self, index: usize) -> Option<usize> {
        self.labels.get(index).copied().flatten()
    }

    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Number of points mapped to some facility
    pub fn assigned_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_some()).count()
    }

    /// Whether every point is mapped
    pub fn is_complete(&self) -> bool {
        self.labels.iter().all(Option::is_some)
    }

    /// Indices of the points mapped to facility `id`
    pub fn members(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, &label)| label == Some(id))
            .map(|(i, _)| i)
    }

    /// Points served by each of `n_facilities` facilities. Labels outside
    /// `0..n_facilities` are not counted.
    pub fn cluster_sizes(&self, n_facilities: usize) -> Vec<usize> {
        let mut sizes = vec![0usize; n_facilities];
        for &label in self.labels.iter().flatten() {
            if let Some(size) = sizes.get_mut(label) {
                *size += 1;
            }
        }
        sizes
    }
}

impl From<Vec<Option<usize>>> for Assignment {
    fn from(labels: Vec<Option<usize>>) -> Self {
        Self { labels }
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(labels: Vec<usize>) -> Self {
        Self {
            labels: labels.into_iter().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned() {
        let assignment = Assignment::unassigned(4);
        assert_eq!(assignment.len(), 4);
        assert_eq!(assignment.assigned_count(), 0);
        assert!(!assignment.is_complete());
        assert_eq!(assignment.get(0), None);
    }

    #[test]
    fn test_members_and_sizes() {
        let assignment = Assignment::from(vec![Some(1), None, Some(0), Some(1)]);

        assert_eq!(assignment.members(1).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(assignment.cluster_sizes(3), vec![1, 2, 0]);
        assert_eq!(assignment.assigned_count(), 3);
    }

    #[test]
    fn test_from_complete_labels() {
        let assignment = Assignment::from(vec![0, 0, 2]);
        assert!(assignment.is_complete());
        assert_eq!(assignment.get(2), Some(2));
        assert_eq!(assignment.get(3), None);
    }
}

use crate::util::build_index_map;
use crate::{GroundTruthNetwork, Sign, SignedEdge};

/// Methods for constructing and inspecting `GroundTruthNetwork`s.
impl GroundTruthNetwork {
    /// Create a new network from a list of gene names and a list of edges.
    ///
    /// The gene ordering is preserved. Neither duplicate genes nor edges referencing
    /// unknown genes are rejected here.
    pub fn new(genes: Vec<String>, edges: Vec<SignedEdge>) -> GroundTruthNetwork {
        GroundTruthNetwork { genes, edges }
    }

    pub fn get_genes(&self) -> &[String] {
        &self.genes
    }

    pub fn get_edges(&self) -> &[SignedEdge] {
        &self.edges
    }

    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges with the given sign.
    pub fn count_edges(&self, sign: Sign) -> usize {
        self.edges.iter().filter(|e| e.get_sign() == sign).count()
    }

    /// Index of the given gene in the gene ordering of this network.
    pub fn find_gene(&self, name: &str) -> Option<usize> {
        self.genes.iter().position(|g| g == name)
    }

    /// Compute the binary adjacency matrix of this network, indexed by the gene ordering.
    ///
    /// Entry `[i][j]` is `1` if there is at least one edge from gene `i` to gene `j`.
    /// Signs are ignored and duplicate edges collapse into one entry. Edges that reference
    /// a gene which is not in the gene list are skipped.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.genes.len();
        let index = build_index_map(&self.genes, |_, i| i);
        let mut matrix = vec![vec![0u8; n]; n];
        for edge in &self.edges {
            let source = index.get(edge.get_source());
            let target = index.get(edge.get_target());
            if let (Some(&i), Some(&j)) = (source, target) {
                matrix[i][j] = 1;
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use crate::{GroundTruthNetwork, Sign, SignedEdge};
    use pretty_assertions::assert_eq;

    fn genes(names: &[&str]) -> Vec<String> {
        names.iter().map(|it| it.to_string()).collect()
    }

    #[test]
    fn adjacency_matrix_basic() {
        let network = GroundTruthNetwork::new(
            genes(&["G1", "G2", "G3"]),
            vec![
                SignedEdge::activation("G1", "G2"),
                SignedEdge::repression("G3", "G1"),
                SignedEdge::activation("G2", "G2"),
            ],
        );
        let expected: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![0, 1, 0], vec![1, 0, 0]];
        assert_eq!(expected, network.adjacency_matrix());
        assert_eq!(2, network.count_edges(Sign::Activation));
        assert_eq!(1, network.count_edges(Sign::Repression));
        assert_eq!(Some(2), network.find_gene("G3"));
        assert_eq!(None, network.find_gene("G4"));
    }

    #[test]
    fn adjacency_matrix_ignores_duplicates() {
        let unique = vec![
            SignedEdge::activation("A", "B"),
            SignedEdge::repression("B", "C"),
        ];
        let mut duplicated = unique.clone();
        duplicated.push(SignedEdge::activation("A", "B"));
        duplicated.push(SignedEdge::repression("A", "B"));
        duplicated.push(SignedEdge::repression("B", "C"));

        let gene_list = genes(&["A", "B", "C"]);
        let a = GroundTruthNetwork::new(gene_list.clone(), unique);
        let b = GroundTruthNetwork::new(gene_list, duplicated);
        assert_eq!(a.adjacency_matrix(), b.adjacency_matrix());
    }

    #[test]
    fn adjacency_matrix_skips_unknown_genes() {
        let network = GroundTruthNetwork::new(
            genes(&["A", "B"]),
            vec![
                SignedEdge::activation("A", "X"),
                SignedEdge::activation("X", "B"),
            ],
        );
        let expected: Vec<Vec<u8>> = vec![vec![0, 0], vec![0, 0]];
        assert_eq!(expected, network.adjacency_matrix());
    }

    #[test]
    fn adjacency_matrix_size_follows_genes() {
        let network = GroundTruthNetwork::new(genes(&["A", "B", "C", "D"]), Vec::new());
        let matrix = network.adjacency_matrix();
        assert_eq!(4, matrix.len());
        assert!(matrix.iter().all(|row| row.len() == 4));
    }
}

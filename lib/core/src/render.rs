use crate::graph::Graph;
use std::fmt::{self, Display};

impl<K: Ord + Display> Graph<K> {
    /// One display line per node, in key order.
    ///
    /// Weighted graphs render as `[h] --> c (5), a (3)`, unweighted ones
    /// as `[h] --> c, a`. A node without outgoing edges renders as `[h] -->`.
    pub fn render(&self) -> Vec<String> {
        self.adjacency()
            .map(|(key, edges)| {
                let mut line = format!("[{}] -->", key);
                for (i, edge) in edges.iter().enumerate() {
                    line.push_str(if i == 0 { " " } else { ", " });
                    if self.is_weighted() {
                        line.push_str(&format!("{} ({})", edge.target, edge.weight));
                    } else {
                        line.push_str(&edge.target.to_string());
                    }
                }
                line
            })
            .collect()
    }
}

impl<K: Ord + Display> Display for Graph<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Graph;

    #[test]
    fn test_render_weighted() {
        let mut graph = Graph::directed(true);
        graph.insert_edge("h", "c", 5);
        graph.insert_edge("h", "a", 3);

        assert_eq!(
            graph.render(),
            vec!["[a] -->", "[c] -->", "[h] --> c (5), a (3)"]
        );
    }

    #[test]
    fn test_render_unweighted_omits_weights() {
        let mut graph = Graph::undirected(false);
        graph.insert_edge("x", "y", 9);

        assert_eq!(graph.render(), vec!["[x] --> y", "[y] --> x"]);
    }

    #[test]
    fn test_display_joins_lines() {
        let mut graph = Graph::directed(true);
        graph.insert_edge(1u32, 2, 1);

        assert_eq!(graph.to_string(), "[1] --> 2 (1)\n[2] -->");
        assert_eq!(Graph::<u32>::default().to_string(), "");
    }
}

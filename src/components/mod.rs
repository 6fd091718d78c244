pub mod json_graph;

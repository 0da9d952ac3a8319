//! Text and HTML summaries of a solved route.

use std::fmt::Write;

use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use routeviz_graph::{DistanceTable, Graph, Route};

const NO_PATH: &str = "No path found.";

/// One line per leg followed by the total, or [`NO_PATH`].
pub fn path_details(graph: &Graph, route: &Route) -> Result<String> {
    let mut out = String::new();
    let Some(total) = route.distance.finite().filter(|_| !route.is_empty()) else {
        out.push_str(NO_PATH);
        out.push('\n');
        return Ok(out);
    };

    writeln!(out, "Shortest route:")?;
    for leg in route.legs(graph) {
        writeln!(out, "{} → {} : {} km", leg.from, leg.to, leg.weight)?;
    }
    writeln!(out, "Total distance: {total} km")?;
    Ok(out)
}

/// Tab separated matrix with `-` for missing edges.
pub fn distance_table_text(table: &DistanceTable) -> Result<String> {
    let mut out = String::new();
    for name in table.names() {
        write!(out, "\t{name}")?;
    }
    out.push('\n');
    for (name, cells) in table.rows() {
        out.push_str(name);
        for cell in cells {
            match cell {
                Some(weight) => write!(out, "\t{weight}")?,
                None => out.push_str("\t-"),
            }
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn html_report(
    graph: &Graph,
    route: &Route,
    start: &str,
    end: &str,
    png: &[u8],
) -> Result<String> {
    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"fr\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>Shortest route</title>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(
        html,
        "<h2>Path between {} &amp; {}</h2>",
        escape_html(start),
        escape_html(end)
    )?;

    write_path(&mut html, graph, route)?;
    writeln!(html, "<h3>Table of distances</h3>")?;
    write_table(&mut html, &DistanceTable::from_graph(graph))?;

    writeln!(html, "<h3>Network graph</h3>")?;
    writeln!(
        html,
        "<img src=\"data:image/png;base64,{}\" alt=\"Network graph\">",
        STANDARD.encode(png)
    )?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_path(html: &mut String, graph: &Graph, route: &Route) -> Result<()> {
    let Some(total) = route.distance.finite().filter(|_| !route.is_empty()) else {
        writeln!(html, "<p>{NO_PATH}</p>")?;
        return Ok(());
    };

    writeln!(html, "<h3>Shortest route:</h3>")?;
    writeln!(html, "<ul>")?;
    for leg in route.legs(graph) {
        writeln!(
            html,
            "<li>{} → {} : {} km</li>",
            escape_html(leg.from),
            escape_html(leg.to),
            leg.weight
        )?;
    }
    writeln!(html, "</ul>")?;
    writeln!(html, "<p><strong>Total distance: {total} km</strong></p>")?;
    Ok(())
}

fn write_table(html: &mut String, table: &DistanceTable) -> Result<()> {
    writeln!(html, "<table border=\"1\">")?;
    html.push_str("<tr><th></th>");
    for name in table.names() {
        write!(html, "<th>{}</th>", escape_html(name))?;
    }
    html.push_str("</tr>\n");

    for (name, cells) in table.rows() {
        write!(html, "<tr><th>{}</th>", escape_html(name))?;
        for cell in cells {
            match cell {
                Some(weight) => write!(html, "<td>{weight}</td>")?,
                None => html.push_str("<td>-</td>"),
            }
        }
        html.push_str("</tr>\n");
    }
    writeln!(html, "</table>")?;
    Ok(())
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeviz_graph::shortest_path;

    fn diamond() -> Graph {
        Graph::from_edges(
            &["A", "B", "C", "D"],
            &[("A", "B", 10), ("B", "C", 5), ("A", "C", 20), ("C", "D", 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_path_details() {
        let graph = diamond();
        let route = shortest_path(&graph, "A", "D").unwrap();
        let text = path_details(&graph, &route).unwrap();
        assert_eq!(
            text,
            "Shortest route:\nA → B : 10 km\nB → C : 5 km\nC → D : 1 km\nTotal distance: 16 km\n"
        );
    }

    #[test]
    fn test_no_path() {
        let graph = Graph::new(["X", "Y"]).unwrap();
        let route = shortest_path(&graph, "X", "Y").unwrap();
        assert_eq!(path_details(&graph, &route).unwrap(), "No path found.\n");

        let html = html_report(&graph, &route, "X", "Y", &[]).unwrap();
        assert!(html.contains("<p>No path found.</p>"));
        assert!(!html.contains("Total distance"));
    }

    #[test]
    fn test_distance_table_text() {
        let text = distance_table_text(&DistanceTable::from_graph(&diamond())).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "\tA\tB\tC\tD");
        assert_eq!(lines[1], "A\t-\t10\t20\t-");
        assert_eq!(lines[4], "D\t-\t-\t1\t-");
    }

    #[test]
    fn test_html_report() {
        let graph = Graph::from_edges(&["Saint-Denis <Nord>", "Lyon"], &[("Lyon", "Saint-Denis <Nord>", 42)])
            .unwrap();
        let route = shortest_path(&graph, "Saint-Denis <Nord>", "Lyon").unwrap();
        let html = html_report(&graph, &route, "Saint-Denis <Nord>", "Lyon", b"png").unwrap();

        assert!(html.contains("<title>Shortest route</title>"));
        assert!(html.contains("<h2>Path between Saint-Denis &lt;Nord&gt; &amp; Lyon</h2>"));
        assert!(html.contains("<li>Saint-Denis &lt;Nord&gt; → Lyon : 42 km</li>"));
        assert!(html.contains("Total distance: 42 km"));
        assert!(html.contains("<td>42</td>"));
        assert!(html.contains("<td>-</td>"));
        assert!(html.contains("data:image/png;base64,cG5n"));
        assert!(!html.contains("<Nord>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a&b "c" 'd'"#), "a&amp;b &quot;c&quot; &#39;d&#39;");
    }
}

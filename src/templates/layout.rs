//! Shared layout component template

const SHARED_LAYOUT: &str = r#"
import React from 'react';

interface SharedLayoutProps {
  children: React.ReactNode;
}

export const SharedLayout: React.FC<SharedLayoutProps> = ({ children }) => {
  return (
    <div className="main-layout">
      <div className="analysis-tabs">
        <div className="tab">Structure Analysis</div>
        <div className="tab">Expression Analysis</div>
      </div>

      <div className="alphafold-explorer">
        <h2>AlphaFold Data Explorer</h2>
        <div className="search-section">
          <select className="gene-expression-dropdown">
            <option value="gene">Gene Expression</option>
          </select>
          <input type="text" placeholder="Enter gene name..." />
          <input type="text" placeholder="Organism (e.g., Homo sapiens)" />
          <input type="text" placeholder="Experiment Type (e.g., RNA-seq)" />
          <button className="search-button">Search</button>
        </div>
      </div>

      {children}
    </div>
  );
};
"#;

/// Render the layout component source
pub fn render_layout() -> &'static str {
    SHARED_LAYOUT.trim()
}

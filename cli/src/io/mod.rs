mod csv;
mod geojson;

pub(crate) use csv::write_selection_csv;
pub(crate) use geojson::read_features;

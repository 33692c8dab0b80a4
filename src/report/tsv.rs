use std::io::{self, Write};

use crate::model::roc::RocPoint;
use crate::pipeline::SweepRow;
use crate::report::{format_f64_6, format_metric_tsv, format_threshold};

pub fn write_roc_tsv<W: Write>(w: &mut W, points: &[RocPoint]) -> io::Result<()> {
    writeln!(w, "threshold\tfpr\ttpr")?;
    for p in points {
        writeln!(
            w,
            "{}\t{}\t{}",
            format_threshold(p.threshold),
            format_f64_6(p.fpr),
            format_f64_6(p.tpr)
        )?;
    }
    Ok(())
}

pub fn write_predictions_tsv<W: Write>(
    w: &mut W,
    labels: &[u8],
    scores: &[f64],
    predictions: &[u8],
) -> io::Result<()> {
    writeln!(w, "row\tlabel\tscore\tprediction")?;
    for (row, ((label, score), prediction)) in labels
        .iter()
        .zip(scores)
        .zip(predictions)
        .enumerate()
    {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            row + 1,
            label,
            format_f64_6(*score),
            prediction
        )?;
    }
    Ok(())
}

pub fn write_sweep_tsv<W: Write>(w: &mut W, rows: &[SweepRow]) -> io::Result<()> {
    writeln!(w, "threshold\ttn\tfp\tfn\ttp\tprecision\trecall\tf1")?;
    for r in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            format_f64_6(r.threshold),
            r.confusion.true_negatives(),
            r.confusion.false_positives(),
            r.confusion.false_negatives(),
            r.confusion.true_positives(),
            format_metric_tsv(r.precision),
            format_metric_tsv(r.recall),
            format_metric_tsv(r.f1)
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;

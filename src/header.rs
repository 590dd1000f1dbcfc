//! Graph file header: fixed and variable-length fields preceding the
//! record body, and the derived record size used to navigate it.

use std::io::Read;

use crate::error::GraphError;

const MAGIC: &[u8; 6] = b"CORTEX";
const SUPPORTED_VERSION: u32 = 6;
const ERROR_RATE_LEN: usize = 16;

/// Per-color graph-cleaning metadata, one block per color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInfoBlock {
    pub tip_clipping_applied: bool,
    pub low_coverage_supernodes_removed: bool,
    pub low_coverage_kmers_removed: bool,
    pub cleaned_against_another_graph: bool,
    pub low_coverage_supernodes_threshold: u32,
    pub low_coverage_kmers_threshold: u32,
    pub cleaned_against_graph_name: String,
}

/// A parsed graph file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub kmer_size: u32,
    pub kmer_container_size: u32,
    pub num_colors: u32,
    pub mean_read_lengths: Vec<u32>,
    pub total_sequence: Vec<u64>,
    pub sample_names: Vec<String>,
    pub error_rate: [u8; ERROR_RATE_LEN],
    pub color_info: Vec<ColorInfoBlock>,
    /// Size in bytes of one fixed-width k-mer record in the body.
    pub record_size: u64,
}

fn read_exact_array<R: Read, const N: usize>(r: &mut R) -> Result<[u8; N], GraphError> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

fn read_u32<R: Read>(r: &mut R) -> Result<u32, GraphError> {
    Ok(u32::from_le_bytes(read_exact_array(r)?))
}

fn read_u64<R: Read>(r: &mut R) -> Result<u64, GraphError> {
    Ok(u64::from_le_bytes(read_exact_array(r)?))
}

fn read_bool<R: Read>(r: &mut R) -> Result<bool, GraphError> {
    let byte: [u8; 1] = read_exact_array(r)?;
    Ok(byte[0] != 0)
}

fn read_length_prefixed_string<R: Read>(r: &mut R) -> Result<String, GraphError> {
    let len = read_u32(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

impl Header {
    /// Parses a header from the start of `reader`, leaving the stream
    /// positioned at the first byte of the record body.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, GraphError> {
        let magic = read_exact_array::<_, 6>(reader)?;
        if &magic != MAGIC {
            return Err(GraphError::BadMagic { found: magic });
        }

        let version = read_u32(reader)?;
        if version != SUPPORTED_VERSION {
            return Err(GraphError::UnsupportedVersion {
                found: version,
                expected: SUPPORTED_VERSION,
            });
        }

        let kmer_size = read_u32(reader)?;
        if kmer_size < 1 {
            return Err(GraphError::InvalidKmerSize { found: kmer_size });
        }

        let kmer_container_size = read_u32(reader)?;
        if kmer_container_size < 1 {
            return Err(GraphError::InvalidContainerSize {
                found: kmer_container_size,
            });
        }

        let num_colors = read_u32(reader)?;
        if num_colors < 1 {
            return Err(GraphError::InvalidNumColors { found: num_colors });
        }
        let num_colors_usize = num_colors as usize;

        let mut mean_read_lengths = Vec::with_capacity(num_colors_usize);
        for _ in 0..num_colors_usize {
            mean_read_lengths.push(read_u32(reader)?);
        }

        let mut total_sequence = Vec::with_capacity(num_colors_usize);
        for _ in 0..num_colors_usize {
            total_sequence.push(read_u64(reader)?);
        }

        let mut sample_names = Vec::with_capacity(num_colors_usize);
        for _ in 0..num_colors_usize {
            sample_names.push(read_length_prefixed_string(reader)?);
        }

        let error_rate = read_exact_array::<_, ERROR_RATE_LEN>(reader)?;

        let mut color_info = Vec::with_capacity(num_colors_usize);
        for _ in 0..num_colors_usize {
            color_info.push(ColorInfoBlock {
                tip_clipping_applied: read_bool(reader)?,
                low_coverage_supernodes_removed: read_bool(reader)?,
                low_coverage_kmers_removed: read_bool(reader)?,
                cleaned_against_another_graph: read_bool(reader)?,
                low_coverage_supernodes_threshold: read_u32(reader)?,
                low_coverage_kmers_threshold: read_u32(reader)?,
                cleaned_against_graph_name: read_length_prefixed_string(reader)?,
            });
        }

        let trailing_magic = read_exact_array::<_, 6>(reader)?;
        if &trailing_magic != MAGIC {
            return Err(GraphError::BadTrailingMagic {
                found: trailing_magic,
            });
        }

        let record_size = 8 * u64::from(kmer_container_size) + 5 * u64::from(num_colors);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            kmer_size,
            kmer_container_size,
            num_colors,
            record_size,
            "parsed graph header"
        );

        Ok(Self {
            version,
            kmer_size,
            kmer_container_size,
            num_colors,
            mean_read_lengths,
            total_sequence,
            sample_names,
            error_rate,
            color_info,
            record_size,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftRecord {
    pub serial_number: i64,
    pub metadata: Vec<u8>,
    pub deleted: bool,
}

/// NFT inventory of one token kept as three parallel sequences.
///
/// Records can only be appended or reversed as a whole, so the sequences
/// always share the same length and index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftInventory {
    serials: Vec<i64>,
    metadata: Vec<Vec<u8>>,
    deleted: Vec<bool>,
}

impl NftInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: NftRecord) {
        self.serials.push(record.serial_number);
        self.metadata.push(record.metadata);
        self.deleted.push(record.deleted);
    }

    /// Reverses all sequences in lockstep. The mirror lists newest first, after
    /// this index 0 holds the first minted NFT.
    pub fn reverse(&mut self) {
        self.serials.reverse();
        self.metadata.reverse();
        self.deleted.reverse();
    }

    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }

    pub fn serials(&self) -> &[i64] {
        &self.serials
    }

    pub fn metadata(&self) -> &[Vec<u8>] {
        &self.metadata
    }

    pub fn deleted(&self) -> &[bool] {
        &self.deleted
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.iter().filter(|deleted| **deleted).count()
    }

    /// Consecutive batches of at most `size` records, in order.
    ///
    /// Panics if `size` is zero.
    pub fn batches(&self, size: usize) -> impl Iterator<Item = InventoryBatch<'_>> {
        self.serials
            .chunks(size)
            .zip(self.metadata.chunks(size))
            .zip(self.deleted.chunks(size))
            .enumerate()
            .map(move |(index, ((serials, metadata), deleted))| InventoryBatch {
                index,
                offset: index * size,
                serials,
                metadata,
                deleted,
            })
    }
}

impl FromIterator<NftRecord> for NftInventory {
    fn from_iter<T: IntoIterator<Item = NftRecord>>(iter: T) -> Self {
        let mut inventory = Self::new();
        for record in iter {
            inventory.push(record);
        }
        inventory
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryBatch<'a> {
    pub index: usize,
    /// Position of the first record in the whole inventory.
    pub offset: usize,
    pub serials: &'a [i64],
    pub metadata: &'a [Vec<u8>],
    pub deleted: &'a [bool],
}

impl InventoryBatch<'_> {
    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }

    /// Maps the deleted positions of this batch onto the serials the target
    /// network assigned when minting it. `minted_serials` must be in mint order.
    pub fn burn_serials(&self, minted_serials: &[i64]) -> Vec<i64> {
        self.deleted
            .iter()
            .zip(minted_serials)
            .filter(|(deleted, _)| **deleted)
            .map(|(_, serial)| *serial)
            .collect()
    }
}

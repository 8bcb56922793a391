// A poisoned lock means another thread panicked while mutating the allocator's bookkeeping;
// the pool partition and the client registry can no longer be trusted to agree, so we panic.
pub(crate) const ERR_POISONED_LOCK: &str = "encountered poisoned lock - continued execution \
    is not safe because the pool partition and the session registry may disagree";

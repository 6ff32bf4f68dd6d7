use tallocator::{Allocator, OutOfMemory, print_alloc};

fn main() -> Result<(), OutOfMemory> {
  let alloc = Allocator::<i32>::new();

  // --------------------------------------------------------------------
  // 1) Storage for five i32s, straight from malloc.
  // --------------------------------------------------------------------
  let block = alloc.allocate(5)?;
  println!("[1] Allocate [i32; 5]");
  print_alloc(&block);

  // --------------------------------------------------------------------
  // 2) Construct a value in the first slot, read it, destroy it.
  // --------------------------------------------------------------------
  if let Some(slot) = block.slot(0) {
    unsafe {
      alloc.construct(slot, 42);
      println!("[2] slot 0 = {}", slot.read());
      alloc.destroy(slot);
    }
  }

  // --------------------------------------------------------------------
  // 3) The same strategy rebound to f64.
  // --------------------------------------------------------------------
  let doubles = alloc.rebind::<f64>();
  let more = doubles.allocate(3)?;
  println!("\n[3] Allocate [f64; 3] through the rebound allocator");
  print_alloc(&more);

  doubles.deallocate(more);
  alloc.deallocate(block);

  // --------------------------------------------------------------------
  // 4) Too many elements: refused before malloc is called.
  // --------------------------------------------------------------------
  match alloc.allocate(alloc.max_count() + 1) {
    Ok(block) => alloc.deallocate(block),
    Err(err) => println!("\n[4] {err}"),
  }

  Ok(())
}
